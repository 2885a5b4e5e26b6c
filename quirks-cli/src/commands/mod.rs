pub mod config;
pub mod iter;
pub mod list;
pub mod slice;
pub mod sort;

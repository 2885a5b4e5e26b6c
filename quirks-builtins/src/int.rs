//! `int.__iter__` — iterate an integer as `range(n)`.

use std::ops::Range;

use crate::error::BuiltinError;
use crate::hooks::{BuiltinType, HookTable};
use crate::ideas::INT_ITER;

/// `0..n`, empty for `n <= 0`. Requires the `iterable_int` hook.
pub fn iter_int(hooks: &HookTable, n: i64) -> Result<Range<i64>, BuiltinError> {
    if !hooks.is_hooked(BuiltinType::Int, INT_ITER) {
        return Err(BuiltinError::NotIterable { ty: BuiltinType::Int });
    }
    Ok(0..n.max(0))
}

//! The built-in ideas and their registration.
//!
//! | Type name      | Key             | Hooks             |
//! |----------------|-----------------|-------------------|
//! | `DictSort`     | `dict_sort`     | `dict.sort`       |
//! | `IterableInt`  | `iterable_int`  | `int.__iter__`    |
//! | `FloatSlicing` | `float_slicing` | `str.__getitem__` |

use std::sync::Arc;

use quirks_core::{derive_name, Override, OverrideError, OverrideRegistry};

use crate::hooks::{BuiltinType, HookPayload, HookTable, HookTarget};

pub const DICT_SORT: &str = "sort";
pub const INT_ITER: &str = "__iter__";
pub const STR_GETITEM: &str = "__getitem__";

/// Static description of one idea.
#[derive(Debug, Clone, Copy)]
pub struct Idea {
    /// CamelCase type name; the registry key is derived from it.
    pub type_name: &'static str,
    pub summary: &'static str,
    pub targets: &'static [HookTarget],
}

impl Idea {
    pub fn key(&self) -> String {
        derive_name(self.type_name)
    }
}

/// Every idea, in registration order.
pub const IDEAS: &[Idea] = &[
    Idea {
        type_name: "DictSort",
        summary: "dicts gain an in-place sort() by key",
        targets: &[(BuiltinType::Dict, DICT_SORT)],
    },
    Idea {
        type_name: "IterableInt",
        summary: "iterating an int n yields 0..n",
        targets: &[(BuiltinType::Int, INT_ITER)],
    },
    Idea {
        type_name: "FloatSlicing",
        summary: "string slices accept .5 bounds and split glyphs in half",
        targets: &[(BuiltinType::Str, STR_GETITEM)],
    },
];

/// Look up an idea by registry key.
pub fn find(key: &str) -> Option<&'static Idea> {
    IDEAS.iter().find(|idea| idea.key() == key)
}

/// Register every idea into `registry`, wired to `table`. Nothing is
/// activated.
pub fn install(
    registry: &OverrideRegistry,
    table: &Arc<HookTable>,
) -> Result<Vec<Arc<Override>>, OverrideError> {
    IDEAS
        .iter()
        .map(|idea| {
            let payload = HookPayload::new(idea.key(), idea.targets, table.clone());
            registry.register_type(idea.type_name, payload)
        })
        .collect()
}

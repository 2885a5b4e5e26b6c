//! `dict.sort` — reorder an insertion-ordered map by key, in place.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::BuiltinError;
use crate::hooks::{BuiltinType, HookTable};
use crate::ideas::DICT_SORT;

/// Sort entries by key. Requires the `dict_sort` hook.
pub fn sort_dict<K, V>(hooks: &HookTable, map: &mut IndexMap<K, V>) -> Result<(), BuiltinError>
where
    K: Ord + Hash + Eq,
{
    require_sort(hooks)?;
    map.sort_keys();
    Ok(())
}

/// Sort entries by a key derived from each map key. Stable: entries whose
/// derived keys compare equal keep their relative order.
pub fn sort_dict_by_key<K, V, T, F>(
    hooks: &HookTable,
    map: &mut IndexMap<K, V>,
    mut key: F,
) -> Result<(), BuiltinError>
where
    K: Hash + Eq,
    T: Ord,
    F: FnMut(&K) -> T,
{
    require_sort(hooks)?;
    map.sort_by(|a, _, b, _| key(a).cmp(&key(b)));
    Ok(())
}

fn require_sort(hooks: &HookTable) -> Result<(), BuiltinError> {
    if hooks.is_hooked(BuiltinType::Dict, DICT_SORT) {
        return Ok(());
    }
    Err(BuiltinError::MissingMethod {
        ty: BuiltinType::Dict,
        method: DICT_SORT,
    })
}

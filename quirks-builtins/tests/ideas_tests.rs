//! End-to-end: looking an idea up by name patches the matching builtin;
//! disabling it restores the unpatched behaviour.

use indexmap::IndexMap;
use rstest::rstest;

use quirks_builtins::{
    build_registry, iter_int, slice_str, sort_dict, BuiltinError, BuiltinType, HookPayload,
    HookTable, IDEAS,
};
use quirks_core::{OverrideRegistry, OverrideState};

#[test]
fn registers_all_ideas_unactivated() {
    let (registry, hooks) = build_registry().expect("build");
    let names: Vec<String> = registry.list_names().into_iter().map(|n| n.0).collect();
    assert_eq!(names, ["dict_sort", "iterable_int", "float_slicing"]);
    assert!(registry
        .states()
        .iter()
        .all(|(_, state)| *state == OverrideState::Unknown));
    assert!(hooks.hooked().is_empty(), "registration must not patch anything");
}

#[rstest]
#[case("dict_sort", BuiltinType::Dict, "sort")]
#[case("iterable_int", BuiltinType::Int, "__iter__")]
#[case("float_slicing", BuiltinType::Str, "__getitem__")]
fn lookup_installs_and_disable_removes(
    #[case] name: &str,
    #[case] ty: BuiltinType,
    #[case] method: &str,
) {
    let (registry, hooks) = build_registry().expect("build");
    assert!(!hooks.is_hooked(ty, method));

    let idea = registry.get(name).expect("get");
    assert_eq!(idea.state(), OverrideState::Enabled);
    assert_eq!(hooks.owner(ty, method).as_deref(), Some(name));

    registry.disable(name).expect("disable");
    assert!(!hooks.is_hooked(ty, method));
}

#[test]
fn iterable_int_round_trip() {
    let (registry, hooks) = build_registry().expect("build");
    assert!(matches!(
        iter_int(&hooks, 3),
        Err(BuiltinError::NotIterable { .. })
    ));

    let idea = registry.get("iterable_int").expect("get");
    let first: Vec<i64> = iter_int(&hooks, 3).expect("iter").collect();

    idea.disable().expect("disable");
    assert!(iter_int(&hooks, 3).is_err());

    idea.enable().expect("enable");
    let second: Vec<i64> = iter_int(&hooks, 3).expect("iter").collect();
    assert_eq!(first, second);
}

#[test]
fn dict_sort_via_registry() {
    let (registry, hooks) = build_registry().expect("build");
    let mut map: IndexMap<String, i32> = [("pear", 3), ("apple", 1), ("fig", 2)]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect();

    registry.get("dict_sort").expect("get");
    sort_dict(&hooks, &mut map).expect("sort");
    assert_eq!(
        map.keys().map(String::as_str).collect::<Vec<_>>(),
        ["apple", "fig", "pear"]
    );
}

#[test]
fn float_slicing_via_registry() {
    let (registry, hooks) = build_registry().expect("build");
    assert!(slice_str(&hooks, "Wow", Some(0.5), None, None).is_err());

    registry.get("float_slicing").expect("get");
    assert_eq!(
        slice_str(&hooks, "Wow", Some(0.5), None, None).expect("slice"),
        "Vow"
    );
}

#[test]
fn conflicting_payload_fails_cleanly() {
    let registry = OverrideRegistry::new();
    let hooks = std::sync::Arc::new(HookTable::new());
    quirks_builtins::install(&registry, &hooks).expect("install");

    // a second idea that also wants str.__getitem__
    static RIVAL: &[(BuiltinType, &str)] = &[(BuiltinType::Str, "__getitem__")];
    registry
        .register("rival_slicing", HookPayload::new("rival_slicing", RIVAL, hooks.clone()))
        .expect("register");

    registry.get("float_slicing").expect("get");
    let err = registry.get("rival_slicing").unwrap_err();
    assert!(err.to_string().contains("already hooked"), "got: {err}");

    let rival = registry.peek("rival_slicing").expect("peek");
    assert_eq!(rival.state(), OverrideState::Failed);
    assert!(rival.last_error().is_some());
    assert_eq!(
        hooks.owner(BuiltinType::Str, "__getitem__").as_deref(),
        Some("float_slicing")
    );

    // once the owner steps aside, an explicit enable retries and succeeds
    registry.disable("float_slicing").expect("disable");
    rival.enable().expect("retry");
    assert_eq!(rival.state(), OverrideState::Enabled);
}

#[test]
fn failed_idea_can_be_disabled_while_conflict_remains() {
    let (registry, hooks) = build_registry().expect("build");

    static RIVAL: &[(BuiltinType, &str)] = &[(BuiltinType::Str, "__getitem__")];
    registry
        .register("rival_slicing", HookPayload::new("rival_slicing", RIVAL, hooks.clone()))
        .expect("register");

    registry.get("float_slicing").expect("get");
    assert!(registry.get("rival_slicing").is_err());

    registry.disable("rival_slicing").expect("disable from failed");
    let rival = registry.peek("rival_slicing").expect("peek");
    assert_eq!(rival.state(), OverrideState::Disabled);
    assert_eq!(rival.last_error(), None);

    // the winning idea keeps its hook and keeps working
    assert_eq!(
        hooks.owner(BuiltinType::Str, "__getitem__").as_deref(),
        Some("float_slicing")
    );
    assert_eq!(
        slice_str(&hooks, "Wow", Some(0.5), None, None).expect("slice"),
        "Vow"
    );
}

#[test]
fn idea_table_matches_registry_keys() {
    let keys: Vec<String> = IDEAS.iter().map(|idea| idea.key()).collect();
    assert_eq!(keys, ["dict_sort", "iterable_int", "float_slicing"]);
    assert!(quirks_builtins::ideas::find("float_slicing").is_some());
    assert!(quirks_builtins::ideas::find("weak_typing").is_none());
}

#[test]
fn default_registry_is_shared() {
    let a = quirks_builtins::registry();
    let b = quirks_builtins::registry();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.len(), IDEAS.len());
}

//! Type-name → registry-key derivation.
//!
//! `DictSort` → `dict_sort`, `IterableInt` → `iterable_int`, `Weak` → `weak`.
//!
//! Rule: an `_` goes before every uppercase letter except the first
//! character, then everything is lower-cased. Input outside the
//! `CapitalisedWords` shape is still accepted: digits, underscores and
//! lowercase letters pass through unchanged (`parseJSON2` → `parse_j_s_o_n2`),
//! and the empty string maps to itself.

/// Derive the canonical snake-case registry key for a CamelCase type name.
pub fn derive_name(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len() + 4);
    for (i, ch) in type_name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("DictSort", "dict_sort")]
    #[case("IterableInt", "iterable_int")]
    #[case("FloatSlicing", "float_slicing")]
    #[case("SpellcheckClasses", "spellcheck_classes")]
    #[case("Weak", "weak")]
    fn derives_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(derive_name(input), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("dictSort", "dict_sort")]
    #[case("Int2Str", "int2_str")]
    #[case("ABC", "a_b_c")]
    #[case("already_snake", "already_snake")]
    #[case("ÉtéLong", "été_long")]
    fn non_conforming_input_does_not_panic(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(derive_name(input), expected);
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(derive_name("MutableTuples"), derive_name("MutableTuples"));
    }
}

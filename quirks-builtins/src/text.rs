//! `str.__getitem__` with half-character slice bounds.
//!
//! With the `float_slicing` hook installed, a bound ending in `.5` cuts a
//! glyph in half: `"Wow"[0.5:]` starts on the right half of `W` (`"VV"`),
//! giving `"Vow"`. Without the hook only whole-number bounds are accepted.

use crate::error::BuiltinError;
use crate::hooks::{BuiltinType, HookTable};
use crate::ideas::STR_GETITEM;

/// Glyphs that can be read as two narrower glyphs side by side.
const GLYPH_SPLITS: &[(char, char, char)] = &[
    ('w', 'v', 'v'),
    ('W', 'V', 'V'),
    ('m', 'n', 'n'),
    ('d', 'c', 'l'),
    ('L', '|', '_'),
    ('X', '>', '<'),
    ('V', '\\', '/'),
    ('K', '|', '<'),
    ('B', '|', '3'),
    ('D', '|', ')'),
];

/// `(left, right)` halves of `c`, if it has a known split.
pub fn split_glyph(c: char) -> Option<(char, char)> {
    GLYPH_SPLITS
        .iter()
        .find(|(whole, _, _)| *whole == c)
        .map(|&(_, left, right)| (left, right))
}

/// Slice `text` by characters with `[start:stop:step]` slice semantics.
///
/// `start`/`stop` default to the ends, negative values count from the end,
/// out-of-range values clamp. `step` defaults to 1.
pub fn slice_str(
    hooks: &HookTable,
    text: &str,
    start: Option<f64>,
    stop: Option<f64>,
    step: Option<i64>,
) -> Result<String, BuiltinError> {
    let halves = hooks.is_hooked(BuiltinType::Str, STR_GETITEM);
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(BuiltinError::ZeroStep);
    }

    let (start, split_start) = match start {
        Some(x) => {
            let (idx, split) = bound(x, halves)?;
            (Some(idx), split)
        }
        None => (None, false),
    };
    let (stop, split_stop) = match stop {
        Some(x) => {
            let (idx, split) = bound(x, halves)?;
            (Some(if split { idx + 1 } else { idx }), split)
        }
        None => (None, false),
    };

    let chars: Vec<char> = text.chars().collect();
    let mut out: Vec<char> = slice_positions(chars.len(), start, stop, step)
        .map(|i| chars[i])
        .collect();

    if split_start {
        if let Some(first) = out.first_mut() {
            *first = split_glyph(*first).map_or(*first, |(_, right)| right);
        }
    }
    if split_stop {
        if let Some(last) = out.last_mut() {
            *last = split_glyph(*last).map_or(*last, |(left, _)| left);
        }
    }
    Ok(out.into_iter().collect())
}

/// Truncated index and whether the bound splits a glyph. Zero never splits.
fn bound(x: f64, halves: bool) -> Result<(i64, bool), BuiltinError> {
    if x.fract() == 0.0 {
        return Ok((x as i64, false));
    }
    if halves && x.rem_euclid(1.0) == 0.5 {
        return Ok((x.trunc() as i64, true));
    }
    Err(BuiltinError::NonIntegralIndex { value: x })
}

/// Indices visited by `[start:stop:step]` over a sequence of `len` items.
fn slice_positions(
    len: usize,
    start: Option<i64>,
    stop: Option<i64>,
    step: i64,
) -> impl Iterator<Item = usize> {
    let len = len as i64;
    let clamp = |i: i64, lo: i64, hi: i64| {
        let i = if i < 0 { i + len } else { i };
        i.clamp(lo, hi)
    };
    let (start, stop) = if step > 0 {
        (
            start.map_or(0, |i| clamp(i, 0, len)),
            stop.map_or(len, |i| clamp(i, 0, len)),
        )
    } else {
        (
            start.map_or(len - 1, |i| clamp(i, -1, len - 1)),
            stop.map_or(-1, |i| clamp(i, -1, len - 1)),
        )
    };

    let mut i = start;
    std::iter::from_fn(move || {
        let inside = if step > 0 { i < stop } else { i > stop };
        if !inside {
            return None;
        }
        let current = i;
        // a step past the end of the i64 range leaves nothing further to visit
        i = i.checked_add(step).unwrap_or(if step > 0 { i64::MAX } else { i64::MIN });
        Some(current as usize)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hooked() -> HookTable {
        let table = HookTable::new();
        table.install(BuiltinType::Str, STR_GETITEM, "float_slicing").expect("install");
        table
    }

    #[rstest]
    #[case(None, None, None, "Hello World")]
    #[case(Some(0.0), Some(5.0), None, "Hello")]
    #[case(Some(-5.0), None, None, "World")]
    #[case(None, None, Some(-1), "dlroW olleH")]
    #[case(None, None, Some(2), "HloWrd")]
    #[case(Some(8.0), Some(2.0), Some(-2), "rWo")]
    #[case(Some(100.0), None, None, "")]
    #[case(Some(-100.0), Some(2.0), None, "He")]
    fn whole_bounds_follow_slice_rules(
        #[case] start: Option<f64>,
        #[case] stop: Option<f64>,
        #[case] step: Option<i64>,
        #[case] expected: &str,
    ) {
        let plain = HookTable::new();
        assert_eq!(slice_str(&plain, "Hello World", start, stop, step).expect("slice"), expected);
    }

    #[rstest]
    #[case("Wow", Some(0.5), None, "Vow")]
    #[case("Wow", None, Some(2.5), "Wov")]
    #[case("Hello World", Some(6.5), None, "Vorld")]
    #[case("Hello World", None, Some(10.5), "Hello Worlc")]
    #[case("LXD", Some(0.5), Some(2.5), "_X|")]
    #[case("abc", Some(0.5), None, "abc")]
    #[case("wide", Some(0.5), Some(0.5), "v")]
    fn half_bounds_split_glyphs(
        #[case] text: &str,
        #[case] start: Option<f64>,
        #[case] stop: Option<f64>,
        #[case] expected: &str,
    ) {
        assert_eq!(slice_str(&hooked(), text, start, stop, None).expect("slice"), expected);
    }

    #[test]
    fn negative_half_bound_truncates_toward_zero() {
        // -1.5 truncates to -1: starts on the last char, split right half
        assert_eq!(slice_str(&hooked(), "Saw", Some(-1.5), None, None).expect("slice"), "v");
    }

    #[test]
    fn empty_result_with_split_is_empty() {
        assert_eq!(slice_str(&hooked(), "", Some(0.5), None, None).expect("slice"), "");
    }

    #[test]
    fn half_bound_without_hook_is_rejected() {
        let err = slice_str(&HookTable::new(), "Wow", Some(0.5), None, None).unwrap_err();
        assert_eq!(err, BuiltinError::NonIntegralIndex { value: 0.5 });
    }

    #[test]
    fn other_fractions_are_rejected_even_when_hooked() {
        let err = slice_str(&hooked(), "Wow", Some(1.25), None, None).unwrap_err();
        assert!(matches!(err, BuiltinError::NonIntegralIndex { .. }));
    }

    #[rstest]
    #[case(Some(4.0), Some(i64::MAX), "o")]
    #[case(None, Some(i64::MAX), "H")]
    #[case(Some(1.0), Some(i64::MIN), "e")]
    #[case(None, Some(i64::MIN + 1), "o")]
    fn extreme_steps_take_one_char(
        #[case] start: Option<f64>,
        #[case] step: Option<i64>,
        #[case] expected: &str,
    ) {
        let plain = HookTable::new();
        assert_eq!(slice_str(&plain, "Hello", start, None, step).expect("slice"), expected);
    }

    #[test]
    fn zero_step_is_rejected() {
        let err = slice_str(&hooked(), "Wow", None, None, Some(0)).unwrap_err();
        assert_eq!(err.to_string(), "slice step cannot be zero");
    }

    #[test]
    fn split_table_lookup() {
        assert_eq!(split_glyph('d'), Some(('c', 'l')));
        assert_eq!(split_glyph('a'), None);
    }
}

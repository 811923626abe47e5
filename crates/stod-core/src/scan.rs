use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::unit::Unit;

// A run of digits and dots, optional whitespace, then an ASCII word.
static FRAGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9.]+)\s*([0-9A-Za-z_]+)").expect("fragment pattern is valid")
});

/// One `(magnitude, unit)` match found in a duration expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment<'a> {
    /// Byte range of the whole match in the input.
    pub span: Range<usize>,
    pub magnitude_text: &'a str,
    pub unit_token: &'a str,
    /// `None` when the numeric text holds no digits (e.g. `"."`).
    pub magnitude: Option<f64>,
    /// `None` when the token is not a known alias.
    pub unit: Option<Unit>,
}

impl Fragment<'_> {
    /// Milliseconds this fragment adds to the total; zero when either half
    /// is unusable.
    pub fn contribution_ms(&self) -> f64 {
        match (self.magnitude, self.unit) {
            (Some(value), Some(unit)) => value * unit.factor_ms(),
            _ => 0.0,
        }
    }
}

/// Lazily scan `input` for duration fragments, left to right.
///
/// Text between fragments (words, commas, punctuation) is skipped.
pub fn scan(input: &str) -> impl Iterator<Item = Fragment<'_>> {
    FRAGMENT_RE.captures_iter(input).filter_map(|caps| {
        let whole = caps.get(0)?;
        let magnitude_text = caps.get(1)?.as_str();
        let unit_token = caps.get(2)?.as_str();

        Some(Fragment {
            span: whole.range(),
            magnitude_text,
            unit_token,
            magnitude: leading_decimal(magnitude_text),
            unit: Unit::from_alias(unit_token),
        })
    })
}

/// Read the longest leading decimal number out of a digits-and-dots run.
///
/// `"1.2.3"` reads as `1.2`, `".5"` as `0.5`, `"7."` as `7`. A run without
/// digits before its second dot (`"."`, `"..5"`) has no value.
///
/// A run too long to fit an `f64` (it would read as infinity) also has no
/// value, so such a fragment adds nothing instead of making the total
/// infinite.
fn leading_decimal(text: &str) -> Option<f64> {
    let end = text
        .match_indices('.')
        .nth(1)
        .map_or(text.len(), |(idx, _)| idx);
    let candidate = text[..end].trim_end_matches('.');

    if !candidate.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let normalized: Cow<'_, str> = if candidate.starts_with('.') {
        Cow::Owned(format!("0{candidate}"))
    } else {
        Cow::Borrowed(candidate)
    };

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

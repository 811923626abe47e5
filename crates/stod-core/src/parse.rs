use serde_json::Value;

use crate::scan::scan;
use crate::settings::{ParseOptions, ParseSettings};

/// Parse a duration expression such as `"1 hour 23 minutes 45 seconds"`.
///
/// The result is in milliseconds unless `options` asks for another unit.
/// This never fails: text with nothing recognizable parses to `0`.
pub fn parse(input: &str, options: &ParseOptions) -> f64 {
    parse_with_settings(input, &options.resolve())
}

/// Like [`parse`], for input of unknown type. Anything but a JSON string
/// parses to `0`.
pub fn parse_value(input: &Value, options: &ParseOptions) -> f64 {
    match input {
        Value::String(s) => parse(s, options),
        other => {
            tracing::debug!(kind = value_kind(other), "non-string duration input");
            0.0
        }
    }
}

pub fn parse_with_settings(input: &str, settings: &ParseSettings) -> f64 {
    if input.is_empty() {
        return 0.0;
    }

    let mut total_ms = 0.0;
    for fragment in scan(input) {
        if fragment.magnitude.is_none() {
            tracing::debug!(text = fragment.magnitude_text, "unparseable magnitude");
        }
        if fragment.unit.is_none() {
            tracing::debug!(token = fragment.unit_token, "unrecognized duration unit");
        }
        let contribution = fragment.contribution_ms();
        tracing::trace!(
            magnitude = fragment.magnitude_text,
            unit = fragment.unit_token,
            contribution,
            "fragment"
        );
        total_ms += contribution;
    }

    // Zero means nothing was found; rounding and conversion don't apply.
    if total_ms <= 0.0 {
        return 0.0;
    }

    let result = finish(total_ms, settings);
    tracing::debug!(total_ms, result, unit = %settings.return_unit, "parsed duration");
    result
}

fn finish(total_ms: f64, settings: &ParseSettings) -> f64 {
    let mut value = if settings.round_milliseconds {
        total_ms.round()
    } else {
        total_ms
    };

    if settings.convert {
        value /= settings.return_unit.factor_ms();
        if settings.round_return_unit {
            value = value.round();
        }
    }

    value
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

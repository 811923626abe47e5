use crate::args::OutputFormat;
use serde::Serialize;
use stod_core::{ParseSettings, Unit};

/// One parsed expression, ready for output.
#[derive(Debug, Serialize)]
pub struct Outcome<'a> {
    pub input: &'a str,
    pub value: f64,
    pub unit: Unit,
}

#[derive(Serialize)]
struct JsonOut<'a> {
    settings: &'a ParseSettings,
    results: &'a [Outcome<'a>],
}

pub fn render_json(outcomes: &[Outcome<'_>], settings: &ParseSettings) -> String {
    let out = JsonOut {
        settings,
        results: outcomes,
    };

    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{\"results\":[]}".to_string())
}

pub fn render_human(
    outcomes: &[Outcome<'_>],
    settings: &ParseSettings,
    verbosity: u8,
    quiet: bool,
) -> String {
    let mut out = String::new();

    if !quiet && verbosity > 0 {
        out.push_str(&format!(
            "stod: unit={}, round_ms={}, round_unit={}\n",
            settings.return_unit, settings.round_milliseconds, settings.round_return_unit
        ));
    }

    for o in outcomes {
        if quiet {
            out.push_str(&format!("{}\n", o.value));
        } else {
            out.push_str(&format!("{} => {} {}\n", o.input, o.value, o.unit));
        }
    }

    out
}

pub fn render(
    outcomes: &[Outcome<'_>],
    settings: &ParseSettings,
    format: OutputFormat,
    verbosity: u8,
    quiet: bool,
) -> String {
    match format {
        OutputFormat::Human => render_human(outcomes, settings, verbosity, quiet),
        OutputFormat::Json => render_json(outcomes, settings),
    }
}

pub fn render_units() -> String {
    let mut out = String::new();
    for unit in Unit::ALL {
        out.push_str(&format!(
            "{:<3} {:>10} ms  {}\n",
            unit.symbol(),
            unit.factor_ms(),
            unit.aliases().join(", ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Outcome<'static>> {
        vec![
            Outcome {
                input: "1.5 d",
                value: 36.0,
                unit: Unit::Hour,
            },
            Outcome {
                input: "nothing",
                value: 0.0,
                unit: Unit::Hour,
            },
        ]
    }

    #[test]
    fn human_lines_show_input_value_and_unit() {
        let out = render_human(&sample(), &ParseSettings::default(), 0, false);
        assert_eq!(out, "1.5 d => 36 h\nnothing => 0 h\n");
    }

    #[test]
    fn quiet_prints_values_only() {
        let out = render_human(&sample(), &ParseSettings::default(), 2, true);
        assert_eq!(out, "36\n0\n");
    }

    #[test]
    fn json_carries_settings_and_results() {
        let out = render_json(&sample(), &ParseSettings::default());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["settings"]["returnUnit"], "millisecond");
        assert_eq!(parsed["results"][0]["input"], "1.5 d");
        assert_eq!(parsed["results"][0]["value"], 36.0);
        assert_eq!(parsed["results"][0]["unit"], "hour");
    }

    #[test]
    fn unit_table_lists_every_alias() {
        let out = render_units();
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("m, min, minute, minutes"));
        assert!(out.contains("86400000"));
    }
}

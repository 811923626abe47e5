//! Parse options and their resolved form.
//!
//! [`ParseOptions`] is what callers hand in: every field may be missing.
//! [`ParseSettings`] is what the parser runs with, after defaults are
//! applied field by field.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::unit::Unit;

const RETURN_UNIT_AS: &str = "returnUnitAs";
const ROUND_MILLISECONDS: &str = "roundMilliseconds";
const ROUND_RETURN_UNIT: &str = "roundReturnUnit";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Target unit spelling, resolved with the same alias table as the input.
    pub return_unit_as: Option<String>,
    pub round_milliseconds: Option<bool>,
    pub round_return_unit: Option<bool>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn return_unit_as(mut self, unit: impl Into<String>) -> Self {
        self.return_unit_as = Some(unit.into());
        self
    }

    pub fn round_milliseconds(mut self, round: bool) -> Self {
        self.round_milliseconds = Some(round);
        self
    }

    pub fn round_return_unit(mut self, round: bool) -> Self {
        self.round_return_unit = Some(round);
        self
    }

    /// Lay `other` on top of `self`: fields set in `other` win.
    pub fn merged_with(self, other: ParseOptions) -> ParseOptions {
        ParseOptions {
            return_unit_as: other.return_unit_as.or(self.return_unit_as),
            round_milliseconds: other.round_milliseconds.or(self.round_milliseconds),
            round_return_unit: other.round_return_unit.or(self.round_return_unit),
        }
    }

    /// Apply defaults. An explicit `false` is kept, never replaced.
    pub fn resolve(&self) -> ParseSettings {
        let defaults = ParseSettings::default();

        let return_unit = match self.return_unit_as.as_deref() {
            None => defaults.return_unit,
            Some(token) => Unit::from_alias(token).unwrap_or_else(|| {
                tracing::debug!(token, "unknown returnUnitAs, falling back to milliseconds");
                Unit::Millisecond
            }),
        };

        ParseSettings {
            return_unit,
            convert: self.return_unit_as.as_deref().is_some_and(|t| t != "ms"),
            round_milliseconds: self
                .round_milliseconds
                .unwrap_or(defaults.round_milliseconds),
            round_return_unit: self.round_return_unit.unwrap_or(defaults.round_return_unit),
        }
    }

    /// Pick options out of an untyped JSON value.
    ///
    /// Each field is taken only when it has the right JSON type; anything
    /// else (missing, `null`, a string where a bool belongs) counts as unset.
    /// A non-object value yields no options at all.
    pub fn from_value(value: &Value) -> ParseOptions {
        let Some(obj) = value.as_object() else {
            return ParseOptions::default();
        };

        ParseOptions {
            return_unit_as: obj
                .get(RETURN_UNIT_AS)
                .and_then(Value::as_str)
                .map(str::to_string),
            round_milliseconds: obj.get(ROUND_MILLISECONDS).and_then(Value::as_bool),
            round_return_unit: obj.get(ROUND_RETURN_UNIT).and_then(Value::as_bool),
        }
    }

    pub fn from_json_str(src: &str) -> Result<ParseOptions, Error> {
        let value: Value = serde_json::from_str(src)?;
        if !value.is_object() {
            return Err(Error::Options {
                msg: "expected a JSON object".into(),
            });
        }
        Ok(Self::from_value(&value))
    }

    /// Read options from a JSON file.
    pub fn load(path: &Path) -> Result<ParseOptions, Error> {
        let src = fs::read_to_string(path)?;
        let options = Self::from_json_str(&src)?;
        tracing::debug!(path = %path.display(), ?options, "loaded parse options");
        Ok(options)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseSettings {
    pub return_unit: Unit,
    /// Run the conversion step. Set for every requested target except the
    /// literal `ms`, so `"milliseconds"` and unknown tokens still divide by
    /// one and honor `round_return_unit`.
    pub convert: bool,
    /// Round the millisecond total before converting.
    pub round_milliseconds: bool,
    /// Round the converted value. Has no effect without `convert`.
    pub round_return_unit: bool,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            return_unit: Unit::Millisecond,
            convert: false,
            round_milliseconds: true,
            round_return_unit: false,
        }
    }
}

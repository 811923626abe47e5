//! Parse human-written duration expressions into numbers.
//!
//! ```
//! use stod_core::{ParseOptions, parse};
//!
//! let ms = parse("1 hour 23 minutes 45 seconds 600 milliseconds", &ParseOptions::default());
//! assert_eq!(ms, 5_025_600.0);
//!
//! let hours = parse("1.5 d", &ParseOptions::new().return_unit_as("h"));
//! assert_eq!(hours, 36.0);
//! ```

mod error;
mod parse;
mod scan;
mod settings;
mod unit;

pub use error::Error;
pub use parse::{parse, parse_value, parse_with_settings};
pub use scan::{Fragment, scan};
pub use settings::{ParseOptions, ParseSettings};
pub use unit::Unit;

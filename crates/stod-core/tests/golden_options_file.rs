use std::fs;
use std::path::Path;

use stod_core::{Error, ParseOptions, Unit, parse};

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn golden_options_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("stod.json");

    write_file(
        &path,
        r#"
{
    "returnUnitAs": "days",
    "roundMilliseconds": false,
    "roundReturnUnit": true
}
"#,
    );

    let opts = ParseOptions::load(&path).unwrap();
    let settings = opts.resolve();
    assert_eq!(settings.return_unit, Unit::Day);
    assert!(!settings.round_milliseconds);
    assert!(settings.round_return_unit);

    assert_eq!(parse("36 h", &opts), 2.0);
}

#[test]
fn golden_options_file_partial() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("partial.json");

    write_file(&path, r#"{ "roundMilliseconds": false }"#);

    let opts = ParseOptions::load(&path).unwrap();
    assert_eq!(parse("100.498 ms", &opts), 100.498);
    assert_eq!(opts.return_unit_as, None);
}

#[test]
fn golden_options_file_missing() {
    let tmp = tempfile::tempdir().unwrap();
    let err = ParseOptions::load(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn golden_options_file_malformed() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.json");

    write_file(&path, "returnUnitAs = h");

    let err = ParseOptions::load(&path).unwrap_err();
    assert!(matches!(err, Error::Options { .. }));
    assert!(err.to_string().starts_with("invalid options:"));
}

use stod_core::{ParseOptions, parse};

#[test]
fn golden_composite_expression() {
    let opts = ParseOptions::default();

    assert_eq!(
        parse("1 hour 23 minutes 45 seconds 600 milliseconds", &opts),
        5_025_600.0
    );
    assert_eq!(parse("1h 23m 45s 600ms", &opts), 5_025_600.0);
    assert_eq!(parse("1h, 23m, 45s, 600ms", &opts), 5_025_600.0);
    assert_eq!(
        parse("600 milliseconds 45 seconds 23 minutes 1 hour", &opts),
        5_025_600.0
    );
}

#[test]
fn golden_composite_expression_skips_prose() {
    let opts = ParseOptions::default();

    assert_eq!(
        parse("about 2 days and, roughly, 3 hours (give or take)", &opts),
        183_600_000.0
    );
    assert_eq!(parse("1 hour plus 3 lightyears", &opts), 3_600_000.0);
}

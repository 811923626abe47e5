use stod_core::{ParseOptions, Unit, parse};

fn ms(input: &str) -> f64 {
    parse(input, &ParseOptions::default())
}

#[test]
fn golden_unit_aliases() {
    assert_eq!(ms("3.5d"), 302_400_000.0);
    assert_eq!(ms("3.5day"), 302_400_000.0);
    assert_eq!(ms("3.5days"), 302_400_000.0);

    for unit in Unit::ALL {
        let expected = 2.0 * unit.factor_ms();
        for alias in unit.aliases() {
            assert_eq!(ms(&format!("2{alias}")), expected, "2{alias}");
            assert_eq!(ms(&format!("2 {alias}")), expected, "2 {alias}");
        }
    }
}

#[test]
fn golden_unit_aliases_are_case_sensitive() {
    assert_eq!(ms("2H"), 0.0);
    assert_eq!(ms("2 Hours"), 0.0);
    assert_eq!(ms("2 MS"), 0.0);
    assert_eq!(ms("2 mins"), 0.0);
}

//! End-to-end evaluation tests.

use quanta_calc::error::InputError;
use quanta_calc::{calculate, evaluate};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_identity_conversion_is_exact() {
    // no float conversion happens, the value is preserved bit for bit
    let amount = evaluate("2 kilograms in kg").unwrap();
    assert_eq!(amount.value, 2.0);
    assert_eq!(amount.unit.name, "kg");

    let amount = evaluate("2 kg in kg").unwrap();
    assert_eq!(amount.value, 2.0);
}

#[test]
fn test_result_defaults_to_first_operand_unit() {
    let amount = evaluate("2 kg + 2000 g").unwrap();
    assert_eq!(amount.value, 4.0);
    assert_eq!(amount.unit.name, "kg");

    // the left-most operand wins for the whole chain
    let amount = evaluate("2000 g + 1 kg + 1 kg").unwrap();
    assert_eq!(amount.value, 4000.0);
    assert_eq!(amount.unit.name, "g");
}

#[test]
fn test_chains_evaluate_left_associatively() {
    let amount = evaluate("2 oz - 3 oz + 4 oz").unwrap();
    assert_eq!(amount.value, 3.0);
    assert_eq!(amount.unit.name, "oz");
}

#[test]
fn test_conversion_clause_binds_last() {
    let amount = evaluate("2 oz + 3 oz in pounds").unwrap();
    assert_eq!(amount.unit.name, "pounds");
    assert!(close(amount.value, 0.3125));
}

#[test]
fn test_calculate_formats_two_decimal_places() {
    let cases = [
        ("2 oz", "2.00 oz"),
        ("45 lbs", "45.00 lbs"),
        ("2 kilograms in kg", "2.00 kg"),
        ("2 kg + 2000g", "4.00 kg"),
        ("2 kilograms + 2 kilograms", "4.00 kilograms"),
        ("2 pounds + 2 kilograms", "6.41 pounds"),
        ("2 feet - 2 feet", "0.00 feet"),
        ("2 meters - 2 feet", "1.39 meters"),
        ("2 pounds in ounces", "32.00 ounces"),
        ("2 pounds + 2 kilograms in kilograms", "2.91 kilograms"),
        ("2kg + 34g in grams", "2034.00 grams"),
        ("2 miles + 2 meters in feet", "10566.56 feet"),
        ("12 years in days", "4383.00 days"),
        ("12 mmH2O + 12 mmH2O", "24.00 mmH2O"),
        ("2 oz + 3 oz + 4 oz + 5 oz", "14.00 oz"),
        ("2 oz - 3 oz + 4 oz + 5 oz", "8.00 oz"),
        ("2 oz + 3 oz - 4 oz + 5 oz", "6.00 oz"),
        ("2 oz + 3 oz + 4 oz - 5 oz", "4.00 oz"),
        ("2 oz + 3 oz + 4 oz - 5 oz in pounds", "0.25 pounds"),
    ];
    for (input, expected) in cases {
        assert_eq!(calculate(input).unwrap(), expected, "input: {input}");
    }
}

#[test]
fn test_number_literal_forms_evaluate() {
    assert_eq!(calculate("0x10 oz + 0x10 oz").unwrap(), "32.00 oz");
    assert_eq!(calculate("2,000 g in kg").unwrap(), "2.00 kg");
    assert_eq!(calculate("-2 kg + 3 kg").unwrap(), "1.00 kg");
    assert_eq!(calculate("1e3 g in kg").unwrap(), "1.00 kg");
}

#[test]
fn test_multi_word_units_evaluate() {
    assert_eq!(
        calculate("2 fluid ounces + 2 fluid ounces in liters").unwrap(),
        "0.12 liters"
    );
}

#[test]
fn test_affine_temperature_conversion() {
    assert_eq!(
        calculate("100 celsius in fahrenheit").unwrap(),
        "212.00 fahrenheit"
    );
}

#[test]
fn test_incompatible_dimensions_fail() {
    let err = evaluate("2 miles + 3 pounds").unwrap_err();
    match &err {
        InputError::InvalidUnitConversion {
            from,
            to,
            position,
            width,
            ..
        } => {
            assert_eq!(from, "pounds");
            assert_eq!(to, "miles");
            assert_eq!(*position, 13);
            assert_eq!(*width, 6);
        }
        other => panic!("expected InvalidUnitConversion, got {other:?}"),
    }
    assert_eq!(err.to_string(), "cannot convert from pounds to miles");
}

#[test]
fn test_unknown_units_fail_with_position() {
    let err = evaluate("32 googles").unwrap_err();
    match &err {
        InputError::InvalidUnits {
            name,
            position,
            width,
            ..
        } => {
            assert_eq!(name, "googles");
            assert_eq!(*position, 4);
            assert_eq!(*width, 7);
        }
        other => panic!("expected InvalidUnits, got {other:?}"),
    }
}

#[test]
fn test_unknown_conversion_target_fails() {
    let err = evaluate("2 kg in googles").unwrap_err();
    assert!(matches!(err, InputError::InvalidUnits { position: 9, .. }));
}

#[test]
fn test_render_points_at_the_offending_substring() {
    let err = evaluate("32 googles").unwrap_err();
    assert_eq!(
        err.render(),
        "error: 'googles' is not a known measurement unit at position 4\n\
         \x20 |\n\
         \x20 | 32 googles\n\
         \x20 |    ^^^^^^^"
    );
}

#[test]
fn test_each_request_is_isolated() {
    // a failed evaluation leaves nothing behind for the next one
    assert!(evaluate("32 googles").is_err());
    assert_eq!(calculate("2 oz").unwrap(), "2.00 oz");
}

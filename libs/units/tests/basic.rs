use quanta_units::{convert, find, Dimension, Error};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn find_resolves_symbols_words_and_plurals() {
    assert_eq!(find("kg").unwrap().name, "kilogram");
    assert_eq!(find("kilogram").unwrap().name, "kilogram");
    assert_eq!(find("kilograms").unwrap().name, "kilogram");
    assert_eq!(find("lbs").unwrap().name, "pound");
}

#[test]
fn find_is_case_insensitive() {
    assert_eq!(find("KG").unwrap().name, "kilogram");
    assert_eq!(find("Miles").unwrap().name, "mile");
    assert_eq!(find("mmhg").unwrap().name, "mmHg");
}

#[test]
fn find_accepts_multi_word_names() {
    assert_eq!(find("fluid ounces").unwrap().name, "fluid ounce");
    assert_eq!(find("fluid  ounces").unwrap().name, "fluid ounce");
}

#[test]
fn find_rejects_unknown_names() {
    let err = find("googles").unwrap_err();
    assert_eq!(err, Error::UnknownUnit("googles".into()));
}

#[test]
fn spellings_share_a_canonical_unit() {
    let kg = find("kg").unwrap();
    let kilograms = find("kilograms").unwrap();
    assert_eq!(kg.name, kilograms.name);
    assert_eq!(kg.dimension, Dimension::Mass);
}

#[test]
fn converts_grams_to_kilograms() {
    let g = find("g").unwrap();
    let kg = find("kg").unwrap();
    assert_eq!(convert(2000.0, g, kg).unwrap(), 2.0);
}

#[test]
fn converts_minutes_to_seconds() {
    let min = find("min").unwrap();
    let s = find("s").unwrap();
    assert_eq!(convert(1.0, min, s).unwrap(), 60.0);
}

#[test]
fn converts_pounds_to_kilograms() {
    let lb = find("pounds").unwrap();
    let kg = find("kg").unwrap();
    assert!(close(convert(2.0, lb, kg).unwrap(), 0.90718474));
}

#[test]
fn converts_years_to_days() {
    let years = find("years").unwrap();
    let days = find("days").unwrap();
    assert!(close(convert(12.0, years, days).unwrap(), 4383.0));
}

#[test]
fn converts_celsius_to_fahrenheit() {
    let c = find("celsius").unwrap();
    let f = find("fahrenheit").unwrap();
    assert!(close(convert(100.0, c, f).unwrap(), 212.0));
    assert!(close(convert(0.0, c, f).unwrap(), 32.0));
}

#[test]
fn converts_fahrenheit_to_kelvin() {
    let f = find("fahrenheit").unwrap();
    let k = find("kelvin").unwrap();
    assert!(close(convert(32.0, f, k).unwrap(), 273.15));
}

#[test]
fn rejects_cross_dimension_conversion() {
    let miles = find("miles").unwrap();
    let pounds = find("pounds").unwrap();
    let err = convert(2.0, miles, pounds).unwrap_err();
    assert_eq!(
        err,
        Error::Incompatible {
            from: "mile".into(),
            to: "pound".into(),
        }
    );
}

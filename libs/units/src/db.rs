//! The built-in unit catalog.
//!
//! Factors are expressed against each dimension's base unit: gram, meter,
//! second, liter, pascal, kelvin.

use crate::error::{Error, Result};
use crate::unit::{Dimension, Scale, Unit};
use once_cell::sync::Lazy;
use std::collections::HashMap;

struct Entry {
    unit: Unit,
    aliases: &'static [&'static str],
}

const fn linear(
    name: &'static str,
    dimension: Dimension,
    factor: f64,
    aliases: &'static [&'static str],
) -> Entry {
    Entry {
        unit: Unit {
            name,
            dimension,
            scale: Scale::Linear(factor),
        },
        aliases,
    }
}

const fn affine(
    name: &'static str,
    dimension: Dimension,
    factor: f64,
    offset: f64,
    aliases: &'static [&'static str],
) -> Entry {
    Entry {
        unit: Unit {
            name,
            dimension,
            scale: Scale::Affine { factor, offset },
        },
        aliases,
    }
}

use crate::unit::Dimension::{Length, Mass, Pressure, Temperature, Time, Volume};

static CATALOG: &[Entry] = &[
    // Mass, base gram
    linear("milligram", Mass, 0.001, &["mg", "milligrams"]),
    linear("gram", Mass, 1.0, &["g", "grams"]),
    linear("kilogram", Mass, 1000.0, &["kg", "kilograms"]),
    linear("tonne", Mass, 1_000_000.0, &["t", "tonnes", "ton", "tons"]),
    linear("ounce", Mass, 28.349523125, &["oz", "ounces"]),
    linear("pound", Mass, 453.59237, &["lb", "lbs", "pounds"]),
    linear("stone", Mass, 6350.29318, &["st", "stones"]),
    // Length, base meter
    linear(
        "millimeter",
        Length,
        0.001,
        &["mm", "millimeters", "millimetre", "millimetres"],
    ),
    linear(
        "centimeter",
        Length,
        0.01,
        &["cm", "centimeters", "centimetre", "centimetres"],
    ),
    linear("meter", Length, 1.0, &["m", "meters", "metre", "metres"]),
    linear(
        "kilometer",
        Length,
        1000.0,
        &["km", "kilometers", "kilometre", "kilometres"],
    ),
    linear("inch", Length, 0.0254, &["in", "inches"]),
    linear("foot", Length, 0.3048, &["ft", "feet"]),
    linear("yard", Length, 0.9144, &["yd", "yards"]),
    linear("mile", Length, 1609.344, &["mi", "miles"]),
    // Time, base second
    linear("millisecond", Time, 0.001, &["ms", "milliseconds"]),
    linear("second", Time, 1.0, &["s", "sec", "seconds"]),
    linear("minute", Time, 60.0, &["min", "minutes"]),
    linear("hour", Time, 3600.0, &["h", "hr", "hours"]),
    linear("day", Time, 86_400.0, &["d", "days"]),
    linear("week", Time, 604_800.0, &["wk", "weeks"]),
    // Julian year: 365.25 days
    linear("year", Time, 31_557_600.0, &["yr", "years"]),
    // Volume, base liter
    linear(
        "milliliter",
        Volume,
        0.001,
        &["ml", "milliliters", "millilitre", "millilitres"],
    ),
    linear("liter", Volume, 1.0, &["l", "liters", "litre", "litres"]),
    linear(
        "fluid ounce",
        Volume,
        0.0295735295625,
        &["fl oz", "floz", "fluid ounces"],
    ),
    linear("cup", Volume, 0.2365882365, &["cups"]),
    linear("pint", Volume, 0.473176473, &["pt", "pints"]),
    linear("quart", Volume, 0.946352946, &["qt", "quarts"]),
    linear("gallon", Volume, 3.785411784, &["gal", "gallons"]),
    // Pressure, base pascal
    linear("pascal", Pressure, 1.0, &["pa", "pascals"]),
    linear("kilopascal", Pressure, 1000.0, &["kpa", "kilopascals"]),
    linear("bar", Pressure, 100_000.0, &["bars"]),
    linear("psi", Pressure, 6894.757293168, &[]),
    linear("mmHg", Pressure, 133.322387415, &[]),
    linear("mmH2O", Pressure, 9.80665, &[]),
    // Temperature, base kelvin
    linear("kelvin", Temperature, 1.0, &["k", "kelvins"]),
    affine("celsius", Temperature, 1.0, 273.15, &["c"]),
    affine(
        "fahrenheit",
        Temperature,
        5.0 / 9.0,
        255.3722222222222,
        &["f"],
    ),
];

static INDEX: Lazy<HashMap<String, &'static Unit>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for entry in CATALOG {
        index.insert(entry.unit.name.to_ascii_lowercase(), &entry.unit);
        for alias in entry.aliases {
            index.insert(alias.to_ascii_lowercase(), &entry.unit);
        }
    }
    index
});

/// Resolves a user-spelled unit name to its canonical unit.
///
/// Lookup is ASCII case-insensitive and tolerant of extra whitespace inside
/// multi-word names (`"fluid  ounces"`).
pub fn find(name: &str) -> Result<&'static Unit> {
    let key = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase();
    INDEX
        .get(key.as_str())
        .copied()
        .ok_or_else(|| Error::UnknownUnit(name.into()))
}

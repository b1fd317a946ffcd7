use crate::error::{Error, Result};

/// The physical property a unit measures. Conversion is only defined
/// between units sharing a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Mass,
    Length,
    Time,
    Volume,
    Pressure,
    Temperature,
}

/// How a unit relates to the base unit of its dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scale {
    /// `base = value * factor`; covers everything but thermometers.
    Linear(f64),
    /// `base = value * factor + offset`; Celsius and Fahrenheit.
    Affine { factor: f64, offset: f64 },
}

/// A canonical unit of measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// Canonical name, e.g. `kilogram`. Two spellings that resolve to the
    /// same canonical name are the same unit.
    pub name: &'static str,
    pub dimension: Dimension,
    pub(crate) scale: Scale,
}

impl Unit {
    fn to_base(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Linear(factor) => value * factor,
            Scale::Affine { factor, offset } => value * factor + offset,
        }
    }

    fn from_base(&self, base: f64) -> f64 {
        match self.scale {
            Scale::Linear(factor) => base / factor,
            Scale::Affine { factor, offset } => (base - offset) / factor,
        }
    }
}

/// Converts a value between two units of the same dimension, going through
/// the dimension's base unit.
pub fn convert(value: f64, from: &Unit, to: &Unit) -> Result<f64> {
    if from.dimension != to.dimension {
        return Err(Error::Incompatible {
            from: from.name.into(),
            to: to.name.into(),
        });
    }
    Ok(to.from_base(from.to_base(value)))
}

//! Expression trees produced by the parser.

use std::fmt;

/// A unit name exactly as the user typed it, annotated with its 1-based
/// position in the input. Validity against the unit catalog is checked at
/// evaluation time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitName {
    pub name: String,
    pub position: usize,
}

impl UnitName {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// Width of the name in characters, for diagnostics.
    pub fn width(&self) -> usize {
        self.name.chars().count()
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The result of evaluating an expression: a value paired with the unit it
/// is expressed in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amount {
    pub value: f64,
    pub unit: UnitName,
}

impl Amount {
    pub fn new(value: f64, unit: UnitName) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

/// An expression tree. The tree is finite and immutable once built; each
/// node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A literal quantity like `2 pounds`.
    Value { number: f64, unit: UnitName },
    Addition {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Subtraction {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `in <unit>`: the wrapped expression's result, expressed in the target
    /// unit.
    UnitConversion {
        inner: Box<Expression>,
        target: UnitName,
    },
}

impl Expression {
    pub fn value(number: f64, unit: UnitName) -> Self {
        Expression::Value { number, unit }
    }

    pub fn addition(left: Expression, right: Expression) -> Self {
        Expression::Addition {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn subtraction(left: Expression, right: Expression) -> Self {
        Expression::Subtraction {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conversion(inner: Expression, target: UnitName) -> Self {
        Expression::UnitConversion {
            inner: Box::new(inner),
            target,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Value { number, unit } => write!(f, "{number:.2} {unit}"),
            Expression::Addition { left, right } => write!(f, "{left} + {right}"),
            Expression::Subtraction { left, right } => write!(f, "{left} - {right}"),
            Expression::UnitConversion { inner, target } => write!(f, "{inner} in {target}"),
        }
    }
}

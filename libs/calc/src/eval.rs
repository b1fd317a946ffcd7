//! Evaluation of expression trees.

use crate::ast::{Amount, Expression, UnitName};
use crate::error::InputError;

/// Evaluates an expression bottom-up, converting units on demand through
/// the unit catalog. Arithmetic is plain IEEE-754 double precision; nothing
/// is rounded here.
pub fn eval(expression: &Expression, input: &str) -> Result<Amount, InputError> {
    match expression {
        Expression::Value { number, unit } => {
            quanta_units::find(&unit.name).map_err(|_| InputError::invalid_units(input, unit))?;
            Ok(Amount::new(*number, unit.clone()))
        }
        Expression::Addition { left, right } => eval_binary(left, right, |l, r| l + r, input),
        Expression::Subtraction { left, right } => eval_binary(left, right, |l, r| l - r, input),
        Expression::UnitConversion { inner, target } => {
            let amount = eval(inner, input)?;
            convert(amount, target, input)
        }
    }
}

/// The result of a binary operation is expressed in the left operand's
/// unit; the right operand is converted to it first.
fn eval_binary(
    left: &Expression,
    right: &Expression,
    op: fn(f64, f64) -> f64,
    input: &str,
) -> Result<Amount, InputError> {
    let left = eval(left, input)?;
    let right = convert(eval(right, input)?, &left.unit, input)?;
    Ok(Amount::new(op(left.value, right.value), left.unit))
}

/// Converts an amount to the target unit.
///
/// The same spelled name, or two spellings of the same canonical unit
/// (`kilograms` and `kg`), never go through a float conversion, so the value
/// is preserved exactly.
fn convert(amount: Amount, target: &UnitName, input: &str) -> Result<Amount, InputError> {
    if amount.unit.name == target.name {
        return Ok(amount);
    }
    let from = quanta_units::find(&amount.unit.name)
        .map_err(|_| InputError::invalid_units(input, &amount.unit))?;
    let to =
        quanta_units::find(&target.name).map_err(|_| InputError::invalid_units(input, target))?;
    if from.name == to.name {
        return Ok(Amount::new(amount.value, target.clone()));
    }
    let value = quanta_units::convert(amount.value, from, to)
        .map_err(|_| InputError::invalid_unit_conversion(input, &amount.unit, target))?;
    Ok(Amount::new(value, target.clone()))
}

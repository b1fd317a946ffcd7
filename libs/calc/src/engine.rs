//! The end-to-end pipeline.
//!
//! Each call builds one scanner, one token stream, and one expression tree,
//! evaluates it, and discards everything: requests are fully isolated and
//! there is no cross-request state.

use crate::ast::Amount;
use crate::error::InputError;
use crate::eval::eval;
use crate::parser::Parser;
use tracing::debug;

/// Evaluates an input expression and returns the resulting amount.
pub fn evaluate(input: &str) -> Result<Amount, InputError> {
    let expression = Parser::new(input).parse()?;
    debug!(%expression, "parsed input");
    let amount = eval(&expression, input)?;
    debug!(%amount, "evaluated expression");
    Ok(amount)
}

/// Evaluates an input expression and formats the result to two decimal
/// places, like `4.00 kilograms`. Rounding happens only here, at the
/// presentation boundary.
pub fn calculate(input: &str) -> Result<String, InputError> {
    Ok(evaluate(input)?.to_string())
}

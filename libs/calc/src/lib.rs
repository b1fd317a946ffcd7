#![forbid(unsafe_code)]

//! Calculator for arithmetic over physical quantities.
//!
//! Evaluates expressions like `2 kg + 2000g in grams`: addition and
//! subtraction of quantities carrying measurement units, with explicit
//! conversion through a trailing `in <unit>` clause.
//!
//! ```text
//! Input String
//!      |
//!   Scanner -> Token stream (with source positions)
//!      |
//!   Parser -> Expression tree
//!      |
//!   Evaluator -> Amount (value + unit), or a positioned InputError
//! ```
//!
//! Unit names are resolved through the `quanta-units` catalog at evaluation
//! time. Any failure carries the original input, a 1-based position, and a
//! width, and renders as a caret diagnostic via [`InputError::render`].
//!
//! ```
//! let amount = quanta_calc::evaluate("2 kg + 2000 g").unwrap();
//! assert_eq!(amount.value, 4.0);
//! assert_eq!(amount.unit.name, "kg");
//! ```

pub mod ast;
pub mod engine;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod stream;
pub mod token;

// Re-export main types
pub use ast::{Amount, Expression, UnitName};
pub use engine::{calculate, evaluate};
pub use error::InputError;

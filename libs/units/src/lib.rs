#![forbid(unsafe_code)]

//! A small registry of physical measurement units.
//!
//! The registry answers exactly two questions: what unit does a
//! human-spelled name refer to ([`find`]), and what is a value in one unit
//! worth in another unit of the same dimension ([`convert`]). Names are
//! resolved ASCII case-insensitively across symbols (`kg`), words
//! (`kilogram`), and plurals (`kilograms`); all spellings of a unit resolve
//! to the same canonical [`Unit`], which callers can use to detect that two
//! names need no conversion at all.

mod db;
mod error;
mod unit;

pub use db::find;
pub use error::{Error, Result};
pub use unit::{convert, Dimension, Unit};

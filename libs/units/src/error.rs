use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("incompatible units: '{from}' vs '{to}'")]
    Incompatible { from: String, to: String },
}

use std::io;

use crate::value::Value;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("invalid parameter {name}: expected a number, got {value}")]
    InvalidParameter { name: String, value: Value },

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("step must be nonzero")]
    ZeroStep,

    #[error("(end - start) / step = {0} is not a whole number")]
    FractionalRows(f64),

    #[error("(end - start) / step = {0} is negative")]
    NegativeRows(f64),

    #[error("(end - start) / step = {0} yields too many rows")]
    TooManyRows(f64),

    #[error("{rows} x {columns} matrix exceeds the size limit")]
    TooLarge { rows: usize, columns: usize },

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

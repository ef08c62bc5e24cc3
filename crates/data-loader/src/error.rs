use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open price file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("The price file has no asset columns.")]
    EmptyHeader,

    #[error("Invalid date '{value}' on line {line}")]
    InvalidDate { line: u64, value: String },

    #[error("Invalid price '{value}' for '{asset}' on line {line}")]
    InvalidPrice {
        line: u64,
        asset: String,
        value: String,
    },

    #[error("Malformed price table: {0}")]
    Table(#[from] CoreError),
}

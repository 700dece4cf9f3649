use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrateError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("API request error: {0}")]
    ApiRequestError(reqwest::Error),

    #[error("API returned an error status: {status} for {item}")]
    ApiStatusError {
        status: reqwest::StatusCode,
        item: String,
    },

    #[error("Failed to decode API JSON response: {0}")]
    ApiJsonDecodeError(reqwest::Error),

    #[error("Failed to parse cached JSON payload: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Invalid CSS selector '{selector}': {message}")]
    SelectorParseError { selector: String, message: String },

    #[error("Search response for {code} has no singleResult URL")]
    MissingSearchResult { code: String },
}

pub type Result<T> = std::result::Result<T, CrateError>;

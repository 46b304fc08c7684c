use thiserror::Error;

#[derive(Debug, Error)]
pub enum DividendSimError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Arithmetic overflow: balance left the decimal range in year {year}")]
    Overflow { year: u32 },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DividendSimError {
    fn from(e: serde_json::Error) -> Self {
        DividendSimError::SerializationError(e.to_string())
    }
}

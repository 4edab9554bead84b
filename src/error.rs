// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    #[error("Hex string has odd length: {length}")]
    OddLength { length: usize },
    #[error("Invalid hex character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

impl From<hex::FromHexError> for MalformedInputError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                MalformedInputError::InvalidCharacter { character: c, index }
            }
            // The decoder checks length up front, so these only surface from
            // direct `hex` calls.
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                MalformedInputError::OddLength { length: 0 }
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInputError),
    #[error("Payload too large: {size} bytes exceeds limit of {limit}")]
    PayloadTooLarge { size: usize, limit: usize },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Input errors surfaced as "no data available".
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            AnalysisError::MalformedInput(_) | AnalysisError::PayloadTooLarge { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_error_conversion() {
        let err: MalformedInputError = hex::FromHexError::InvalidHexCharacter { c: 'z', index: 3 }.into();
        assert_eq!(err, MalformedInputError::InvalidCharacter { character: 'z', index: 3 });
    }

    #[test]
    fn test_no_data_classification() {
        let err = AnalysisError::from(MalformedInputError::OddLength { length: 3 });
        assert!(err.is_no_data());
        assert!(!AnalysisError::Config("bad".to_string()).is_no_data());
        assert_eq!(err.to_string(), "Malformed input: Hex string has odd length: 3");
    }
}

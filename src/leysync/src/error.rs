//! Conversion errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unmapped stat code: {0}")]
    UnmappedStatCode(u32),

    #[error("Invalid artifact slot position: {0} (expected 1-5)")]
    InvalidSlotPosition(u8),

    #[error("Malformed numeric string: {0:?}")]
    MalformedNumericString(String),

    #[error("Character {character} is missing its {slot} talent")]
    MissingTalent {
        character: String,
        slot: &'static str,
    },

    #[error("API response rejected: retcode {retcode}, message {message:?}")]
    InvalidEnvelope { retcode: i64, message: String },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

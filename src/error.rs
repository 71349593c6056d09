use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AviaryErrorKind {
    NullRecord,
    InvalidCharacteristic,
    InvalidWingCount,
    InvalidDietSize,
    InvalidVocabulary,
    MissingWaterBody,
    DuplicateIntake,
    ExtinctRecord,
    EnclosureFull,
    IncompatibleClassification,
    DirectoryFull,
    UnknownEnclosureId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct AviaryError {
    pub kind: AviaryErrorKind,
    pub message: String,
}

impl AviaryError {
    pub fn new(kind: AviaryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn null_record(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::NullRecord, message)
}

pub fn invalid_characteristic(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::InvalidCharacteristic, message)
}

pub fn invalid_wing_count(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::InvalidWingCount, message)
}

pub fn invalid_diet_size(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::InvalidDietSize, message)
}

pub fn invalid_vocabulary(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::InvalidVocabulary, message)
}

pub fn missing_water_body(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::MissingWaterBody, message)
}

pub fn duplicate_intake(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::DuplicateIntake, message)
}

pub fn extinct_record(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::ExtinctRecord, message)
}

pub fn enclosure_full(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::EnclosureFull, message)
}

pub fn incompatible_classification(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::IncompatibleClassification, message)
}

pub fn directory_full(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::DirectoryFull, message)
}

pub fn unknown_enclosure_id(message: impl Into<String>) -> AviaryError {
    AviaryError::new(AviaryErrorKind::UnknownEnclosureId, message)
}

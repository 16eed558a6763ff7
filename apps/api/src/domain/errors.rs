use thiserror::Error;

use crate::domain::developer::value_objects::DeveloperLevel;

/// Errors raised by the developer domain and its storage ports
#[derive(Debug, Error)]
pub enum DeveloperError {
    #[error("Developer level {level} does not allow {experience_years} years of experience")]
    LevelExperienceMismatch {
        level: DeveloperLevel,
        experience_years: i32,
    },

    #[error("Member id already exists: {0}")]
    DuplicateMemberId(String),

    #[error("Developer not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DeveloperError {
    /// Stable machine readable code reported to clients
    pub fn code(&self) -> &'static str {
        match self {
            DeveloperError::LevelExperienceMismatch { .. } => "LEVEL_EXPERIENCE_YEARS_NOT_MATCHED",
            DeveloperError::DuplicateMemberId(_) => "DUPLICATED_MEMBER_ID",
            DeveloperError::NotFound(_) => "NO_DEVELOPER",
            DeveloperError::InvalidRequest(_) => "INVALID_REQUEST",
            DeveloperError::Storage(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

pub type DeveloperResult<T> = Result<T, DeveloperError>;

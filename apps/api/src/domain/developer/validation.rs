use crate::domain::developer::value_objects::DeveloperLevel;
use crate::domain::errors::{DeveloperError, DeveloperResult};

/// Upper bound (inclusive) of the junior band
pub const JUNIOR_MAX_EXPERIENCE_YEARS: i32 = 4;
/// Lower bound (inclusive) of the mid band
pub const MID_MIN_EXPERIENCE_YEARS: i32 = 4;
/// Upper bound (inclusive) of the mid band
pub const MID_MAX_EXPERIENCE_YEARS: i32 = 10;
/// Lower bound (inclusive) of the senior band
pub const SENIOR_MIN_EXPERIENCE_YEARS: i32 = 10;

/// Rejects negative experience years
pub fn validate_experience_years(experience_years: i32) -> DeveloperResult<()> {
    if experience_years < 0 {
        return Err(DeveloperError::InvalidRequest(
            "experience_years must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// Checks that the experience years fall inside the band of `level`
///
/// # Rules
/// - Experience years are never negative, whatever the level
/// - `Senior` requires at least 10 years
/// - `Mid` requires between 4 and 10 years
/// - `Junior` allows at most 4 years
/// - `New` is unconstrained
///
/// # Example
/// ```
/// use dmaker_api::domain::developer::validation::validate_level_experience;
/// use dmaker_api::domain::developer::value_objects::DeveloperLevel;
///
/// assert!(validate_level_experience(DeveloperLevel::Senior, 12).is_ok());
/// assert!(validate_level_experience(DeveloperLevel::Senior, 9).is_err());
/// ```
pub fn validate_level_experience(
    level: DeveloperLevel,
    experience_years: i32,
) -> DeveloperResult<()> {
    validate_experience_years(experience_years)?;

    let matched = match level {
        DeveloperLevel::New => true,
        DeveloperLevel::Junior => experience_years <= JUNIOR_MAX_EXPERIENCE_YEARS,
        DeveloperLevel::Mid => (MID_MIN_EXPERIENCE_YEARS..=MID_MAX_EXPERIENCE_YEARS)
            .contains(&experience_years),
        DeveloperLevel::Senior => experience_years >= SENIOR_MIN_EXPERIENCE_YEARS,
    };

    if matched {
        Ok(())
    } else {
        Err(DeveloperError::LevelExperienceMismatch {
            level,
            experience_years,
        })
    }
}

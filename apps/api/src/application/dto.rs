use serde::{Deserialize, Serialize};

use crate::domain::developer::value_objects::{
    DeveloperLevel, DeveloperSkillType, EmploymentStatus,
};
use crate::domain::developer::validation::validate_experience_years;
use crate::domain::developer::Developer;
use crate::domain::errors::{DeveloperError, DeveloperResult};

const MEMBER_ID_LENGTH: std::ops::RangeInclusive<usize> = 3..=50;
const NAME_LENGTH: std::ops::RangeInclusive<usize> = 3..=20;
const MIN_AGE: i32 = 18;

/// Input for creating a developer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeveloper {
    pub member_id: String,
    pub name: String,
    pub age: i32,
    pub developer_level: DeveloperLevel,
    pub developer_skill_type: DeveloperSkillType,
    pub experience_years: i32,
}

impl CreateDeveloper {
    /// Checks field shapes before any business rule runs
    ///
    /// # Validation Rules
    /// - `member_id` is 3 to 50 characters
    /// - `name` is 3 to 20 characters
    /// - `age` is at least 18
    /// - `experience_years` is not negative
    pub fn validate(&self) -> DeveloperResult<()> {
        if !MEMBER_ID_LENGTH.contains(&self.member_id.chars().count()) {
            return Err(DeveloperError::InvalidRequest(
                "member_id must be between 3 and 50 characters".to_string(),
            ));
        }
        if !NAME_LENGTH.contains(&self.name.chars().count()) {
            return Err(DeveloperError::InvalidRequest(
                "name must be between 3 and 20 characters".to_string(),
            ));
        }
        if self.age < MIN_AGE {
            return Err(DeveloperError::InvalidRequest(format!(
                "age must be at least {}",
                MIN_AGE
            )));
        }
        validate_experience_years(self.experience_years)
    }
}

/// Input for editing a developer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditDeveloper {
    pub developer_level: DeveloperLevel,
    pub developer_skill_type: DeveloperSkillType,
    pub experience_years: i32,
}

impl EditDeveloper {
    /// Checks field shapes before any business rule runs
    pub fn validate(&self) -> DeveloperResult<()> {
        validate_experience_years(self.experience_years)
    }
}

/// Summary returned after a successful create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedDeveloper {
    pub developer_level: DeveloperLevel,
    pub developer_skill_type: DeveloperSkillType,
    pub experience_years: i32,
    pub member_id: String,
}

impl From<&Developer> for CreatedDeveloper {
    fn from(developer: &Developer) -> Self {
        Self {
            developer_level: developer.level(),
            developer_skill_type: developer.skill_type(),
            experience_years: developer.experience_years(),
            member_id: developer.member_id().to_string(),
        }
    }
}

/// List entry for an employed developer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperSummary {
    pub developer_level: DeveloperLevel,
    pub developer_skill_type: DeveloperSkillType,
    pub member_id: String,
}

impl From<&Developer> for DeveloperSummary {
    fn from(developer: &Developer) -> Self {
        Self {
            developer_level: developer.level(),
            developer_skill_type: developer.skill_type(),
            member_id: developer.member_id().to_string(),
        }
    }
}

/// Full view of a developer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperDetail {
    pub developer_level: DeveloperLevel,
    pub developer_skill_type: DeveloperSkillType,
    pub experience_years: i32,
    pub status_code: EmploymentStatus,
    pub member_id: String,
    pub name: String,
    pub age: i32,
}

impl From<&Developer> for DeveloperDetail {
    fn from(developer: &Developer) -> Self {
        Self {
            developer_level: developer.level(),
            developer_skill_type: developer.skill_type(),
            experience_years: developer.experience_years(),
            status_code: developer.status(),
            member_id: developer.member_id().to_string(),
            name: developer.name().to_string(),
            age: developer.age(),
        }
    }
}

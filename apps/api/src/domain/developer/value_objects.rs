use serde::{Deserialize, Serialize};
use std::fmt;

/// Seniority band of a developer
///
/// Each band gates the range of experience years a developer may report.
/// See [`validate_level_experience`](super::validation::validate_level_experience).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "developer_level", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeveloperLevel {
    /// Newly hired, no experience requirement
    New,
    /// Entry band, at most 4 years
    Junior,
    /// Mid band, 4 to 10 years
    Mid,
    /// Senior band, at least 10 years
    Senior,
}

impl fmt::Display for DeveloperLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeveloperLevel::New => write!(f, "NEW"),
            DeveloperLevel::Junior => write!(f, "JUNIOR"),
            DeveloperLevel::Mid => write!(f, "MID"),
            DeveloperLevel::Senior => write!(f, "SENIOR"),
        }
    }
}

/// Primary skill area of a developer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "developer_skill_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeveloperSkillType {
    BackEnd,
    FrontEnd,
    FullStack,
}

impl fmt::Display for DeveloperSkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeveloperSkillType::BackEnd => write!(f, "BACK_END"),
            DeveloperSkillType::FrontEnd => write!(f, "FRONT_END"),
            DeveloperSkillType::FullStack => write!(f, "FULL_STACK"),
        }
    }
}

/// Employment status of a developer record
///
/// # Status Transitions
/// ```text
/// Employed -> Retired
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "status_code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    /// Currently employed
    Employed,
    /// Retired, terminal
    Retired,
}

impl EmploymentStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Example
    /// ```
    /// use dmaker_api::domain::developer::value_objects::EmploymentStatus;
    ///
    /// assert!(EmploymentStatus::Employed.can_transition_to(EmploymentStatus::Retired));
    /// assert!(!EmploymentStatus::Retired.can_transition_to(EmploymentStatus::Employed));
    /// ```
    pub fn can_transition_to(&self, next: EmploymentStatus) -> bool {
        matches!(
            (self, next),
            (EmploymentStatus::Employed, EmploymentStatus::Retired)
        )
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentStatus::Employed => write!(f, "EMPLOYED"),
            EmploymentStatus::Retired => write!(f, "RETIRED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employed_can_retire() {
        assert!(EmploymentStatus::Employed.can_transition_to(EmploymentStatus::Retired));
    }

    #[test]
    fn retired_is_terminal() {
        assert!(!EmploymentStatus::Retired.can_transition_to(EmploymentStatus::Employed));
        assert!(!EmploymentStatus::Retired.can_transition_to(EmploymentStatus::Retired));
    }

    #[test]
    fn employed_to_employed_is_not_a_transition() {
        assert!(!EmploymentStatus::Employed.can_transition_to(EmploymentStatus::Employed));
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(DeveloperLevel::Mid.to_string(), "MID");
        assert_eq!(DeveloperSkillType::FullStack.to_string(), "FULL_STACK");
        assert_eq!(EmploymentStatus::Retired.to_string(), "RETIRED");

        for level in [
            DeveloperLevel::New,
            DeveloperLevel::Junior,
            DeveloperLevel::Mid,
            DeveloperLevel::Senior,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level));
        }
    }

    #[test]
    fn deserialize_screaming_snake_case() {
        let skill: DeveloperSkillType = serde_json::from_str("\"BACK_END\"").unwrap();
        assert_eq!(skill, DeveloperSkillType::BackEnd);

        let status: EmploymentStatus = serde_json::from_str("\"EMPLOYED\"").unwrap();
        assert_eq!(status, EmploymentStatus::Employed);

        assert!(serde_json::from_str::<DeveloperLevel>("\"senior\"").is_err());
    }
}

use super::retired::RetiredDeveloper;
use super::validation::validate_level_experience;
use super::value_objects::{DeveloperLevel, DeveloperSkillType, EmploymentStatus};
use crate::domain::errors::DeveloperResult;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Developer aggregate root
///
/// One personnel record, keyed by a unique member id.
///
/// # Invariants
/// - `member_id`, `name` and `age` never change after creation
/// - Level and experience years always satisfy the level band rule
/// - Status starts as `Employed` and can only move to `Retired`
///
/// # Example
/// ```
/// use dmaker_api::domain::developer::Developer;
/// use dmaker_api::domain::developer::value_objects::{
///     DeveloperLevel, DeveloperSkillType, EmploymentStatus,
/// };
///
/// let developer = Developer::new(
///     "m1".to_string(),
///     "Alice".to_string(),
///     30,
///     DeveloperLevel::Senior,
///     DeveloperSkillType::BackEnd,
///     12,
/// ).expect("valid developer");
///
/// assert_eq!(developer.status(), EmploymentStatus::Employed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Developer {
    id: Uuid,
    member_id: String,
    name: String,
    age: i32,
    level: DeveloperLevel,
    skill_type: DeveloperSkillType,
    experience_years: i32,
    status: EmploymentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Developer {
    /// Creates a new employed developer
    ///
    /// # Returns
    /// * `Ok(Developer)` - New developer with `Employed` status
    /// * `Err(DeveloperError::LevelExperienceMismatch)` - If the experience
    ///   years fall outside the level band
    pub fn new(
        member_id: String,
        name: String,
        age: i32,
        level: DeveloperLevel,
        skill_type: DeveloperSkillType,
        experience_years: i32,
    ) -> DeveloperResult<Self> {
        validate_level_experience(level, experience_years)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            member_id,
            name,
            age,
            level,
            skill_type,
            experience_years,
            status: EmploymentStatus::Employed,
            created_at: now,
            updated_at: now,
        })
    }

    /// Updates level, skill type and experience years in place
    ///
    /// Nothing is changed when the new pair violates the level band rule.
    pub fn edit(
        &mut self,
        level: DeveloperLevel,
        skill_type: DeveloperSkillType,
        experience_years: i32,
    ) -> DeveloperResult<()> {
        validate_level_experience(level, experience_years)?;

        self.level = level;
        self.skill_type = skill_type;
        self.experience_years = experience_years;
        self.updated_at = Utc::now();

        Ok(())
    }

    /// Retires the developer
    ///
    /// # Returns
    /// * `Some(RetiredDeveloper)` - Snapshot to persist alongside the status change
    /// * `None` - Developer was already retired; nothing changed
    pub fn retire(&mut self) -> Option<RetiredDeveloper> {
        let next_status = EmploymentStatus::Retired;
        if !self.status.can_transition_to(next_status) {
            return None;
        }

        self.status = next_status;
        self.updated_at = Utc::now();

        Some(RetiredDeveloper::new(
            self.member_id.clone(),
            self.name.clone(),
        ))
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn level(&self) -> DeveloperLevel {
        self.level
    }

    pub fn skill_type(&self) -> DeveloperSkillType {
        self.skill_type
    }

    pub fn experience_years(&self) -> i32 {
        self.experience_years
    }

    pub fn status(&self) -> EmploymentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Developer from persistence layer data
    ///
    /// Skips validation; only to be used by repository implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        member_id: String,
        name: String,
        age: i32,
        level: DeveloperLevel,
        skill_type: DeveloperSkillType,
        experience_years: i32,
        status: EmploymentStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            member_id,
            name,
            age,
            level,
            skill_type,
            experience_years,
            status,
            created_at,
            updated_at,
        }
    }
}

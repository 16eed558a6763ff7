use std::sync::Arc;

use crate::application::dto::{
    CreateDeveloper, CreatedDeveloper, DeveloperDetail, DeveloperSummary, EditDeveloper,
};
use crate::domain::developer::validation::validate_level_experience;
use crate::domain::developer::value_objects::EmploymentStatus;
use crate::domain::developer::Developer;
use crate::domain::errors::{DeveloperError, DeveloperResult};
use crate::domain::repositories::DeveloperRepository;

/// Application service for developer records
///
/// Runs business validation, then performs every write inside a single
/// unit of work. An error before commit drops the unit of work, which
/// rolls all of its writes back.
#[derive(Clone)]
pub struct DeveloperService {
    repository: Arc<dyn DeveloperRepository>,
}

impl DeveloperService {
    pub fn new(repository: Arc<dyn DeveloperRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new employed developer
    ///
    /// # Errors
    /// * `InvalidRequest` - negative experience years
    /// * `LevelExperienceMismatch` - experience years outside the level band
    /// * `DuplicateMemberId` - member id already taken
    pub async fn create_developer(
        &self,
        request: CreateDeveloper,
    ) -> DeveloperResult<CreatedDeveloper> {
        let developer = Developer::new(
            request.member_id,
            request.name,
            request.age,
            request.developer_level,
            request.developer_skill_type,
            request.experience_years,
        )?;

        let mut uow = self.repository.begin().await?;

        if uow
            .find_by_member_id_for_update(developer.member_id())
            .await?
            .is_some()
        {
            return Err(DeveloperError::DuplicateMemberId(
                developer.member_id().to_string(),
            ));
        }

        uow.insert_developer(&developer).await?;
        uow.commit().await?;

        tracing::info!(member_id = %developer.member_id(), "Developer created");

        Ok(CreatedDeveloper::from(&developer))
    }

    /// Lists every employed developer in store order
    pub async fn list_employed_developers(&self) -> DeveloperResult<Vec<DeveloperSummary>> {
        let developers = self
            .repository
            .find_by_status(EmploymentStatus::Employed)
            .await?;

        Ok(developers.iter().map(DeveloperSummary::from).collect())
    }

    /// Returns the full record for a member id
    pub async fn get_developer_detail(&self, member_id: &str) -> DeveloperResult<DeveloperDetail> {
        self.repository
            .find_by_member_id(member_id)
            .await?
            .map(|developer| DeveloperDetail::from(&developer))
            .ok_or_else(|| DeveloperError::NotFound(member_id.to_string()))
    }

    /// Updates level, skill type and experience years of a developer
    ///
    /// Member id, name, age and status are never touched.
    pub async fn edit_developer(
        &self,
        member_id: &str,
        request: EditDeveloper,
    ) -> DeveloperResult<DeveloperDetail> {
        // Validation errors take precedence over NotFound
        validate_level_experience(request.developer_level, request.experience_years)?;

        let mut uow = self.repository.begin().await?;

        let mut developer = uow
            .find_by_member_id_for_update(member_id)
            .await?
            .ok_or_else(|| DeveloperError::NotFound(member_id.to_string()))?;

        developer.edit(
            request.developer_level,
            request.developer_skill_type,
            request.experience_years,
        )?;

        uow.update_developer(&developer).await?;
        uow.commit().await?;

        tracing::info!(member_id = %member_id, "Developer edited");

        Ok(DeveloperDetail::from(&developer))
    }

    /// Retires a developer and records a retirement snapshot
    ///
    /// The status change and the snapshot are committed together. Retiring
    /// an already retired developer changes nothing and returns its detail.
    pub async fn delete_developer(&self, member_id: &str) -> DeveloperResult<DeveloperDetail> {
        let mut uow = self.repository.begin().await?;

        let mut developer = uow
            .find_by_member_id_for_update(member_id)
            .await?
            .ok_or_else(|| DeveloperError::NotFound(member_id.to_string()))?;

        match developer.retire() {
            Some(snapshot) => {
                uow.update_developer(&developer).await?;
                uow.insert_retired(&snapshot).await?;
                uow.commit().await?;

                tracing::info!(member_id = %member_id, "Developer retired");
            }
            None => {
                tracing::debug!(member_id = %member_id, "Developer already retired");
            }
        }

        Ok(DeveloperDetail::from(&developer))
    }
}

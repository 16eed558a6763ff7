use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::developer::value_objects::EmploymentStatus;
use crate::domain::developer::{Developer, RetiredDeveloper};
use crate::domain::errors::{DeveloperError, DeveloperResult};
use crate::domain::repositories::{DeveloperRepository, DeveloperUnitOfWork};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    developers: Vec<Developer>,
    retired: Vec<RetiredDeveloper>,
}

/// In-process implementation of DeveloperRepository
///
/// A unit of work holds the store lock until it is committed or dropped,
/// so writers are serialized. Plain reads wait for any open unit of work.
#[derive(Clone, Default)]
pub struct InMemoryDeveloperRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryDeveloperRepository {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperRepository {
    async fn find_by_member_id(&self, member_id: &str) -> DeveloperResult<Option<Developer>> {
        let state = self.state.lock().await;
        Ok(state
            .developers
            .iter()
            .find(|d| d.member_id() == member_id)
            .cloned())
    }

    async fn find_by_status(&self, status: EmploymentStatus) -> DeveloperResult<Vec<Developer>> {
        let state = self.state.lock().await;
        Ok(state
            .developers
            .iter()
            .filter(|d| d.status() == status)
            .cloned()
            .collect())
    }

    async fn find_retired_by_member_id(
        &self,
        member_id: &str,
    ) -> DeveloperResult<Vec<RetiredDeveloper>> {
        let state = self.state.lock().await;
        Ok(state
            .retired
            .iter()
            .filter(|r| r.member_id() == member_id)
            .cloned()
            .collect())
    }

    async fn begin(&self) -> DeveloperResult<Box<dyn DeveloperUnitOfWork>> {
        let guard = self.state.clone().lock_owned().await;
        let staged = guard.clone();

        Ok(Box::new(InMemoryUnitOfWork { guard, staged }))
    }
}

/// Unit of work over a staged copy of the in-memory store
pub struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    staged: MemoryState,
}

#[async_trait]
impl DeveloperUnitOfWork for InMemoryUnitOfWork {
    async fn find_by_member_id_for_update(
        &mut self,
        member_id: &str,
    ) -> DeveloperResult<Option<Developer>> {
        Ok(self
            .staged
            .developers
            .iter()
            .find(|d| d.member_id() == member_id)
            .cloned())
    }

    async fn insert_developer(&mut self, developer: &Developer) -> DeveloperResult<()> {
        if self
            .staged
            .developers
            .iter()
            .any(|d| d.member_id() == developer.member_id())
        {
            return Err(DeveloperError::DuplicateMemberId(
                developer.member_id().to_string(),
            ));
        }

        self.staged.developers.push(developer.clone());
        Ok(())
    }

    async fn update_developer(&mut self, developer: &Developer) -> DeveloperResult<()> {
        let slot = self
            .staged
            .developers
            .iter_mut()
            .find(|d| d.id() == developer.id())
            .ok_or_else(|| DeveloperError::NotFound(developer.member_id().to_string()))?;

        *slot = developer.clone();
        Ok(())
    }

    async fn insert_retired(&mut self, retired: &RetiredDeveloper) -> DeveloperResult<()> {
        self.staged.retired.push(retired.clone());
        Ok(())
    }

    async fn commit(self: Box<Self>) -> DeveloperResult<()> {
        let InMemoryUnitOfWork { mut guard, staged } = *self;
        *guard = staged;
        Ok(())
    }
}

use async_trait::async_trait;

use crate::domain::developer::value_objects::EmploymentStatus;
use crate::domain::developer::{Developer, RetiredDeveloper};
use crate::domain::errors::DeveloperResult;

/// Repository trait for the Developer aggregate and its retirement snapshots
///
/// Plain reads go straight to the store. Writes happen only through a
/// [`DeveloperUnitOfWork`] obtained from [`DeveloperRepository::begin`].
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Find a developer by member id
    async fn find_by_member_id(&self, member_id: &str) -> DeveloperResult<Option<Developer>>;

    /// Find all developers with the given status, in store order
    async fn find_by_status(&self, status: EmploymentStatus) -> DeveloperResult<Vec<Developer>>;

    /// Find all retirement snapshots recorded for a member id
    async fn find_retired_by_member_id(
        &self,
        member_id: &str,
    ) -> DeveloperResult<Vec<RetiredDeveloper>>;

    /// Open a new unit of work
    async fn begin(&self) -> DeveloperResult<Box<dyn DeveloperUnitOfWork>>;
}

/// A single atomic unit of work against the developer store
///
/// Changes become visible only after [`commit`](DeveloperUnitOfWork::commit).
/// Dropping a unit of work without committing rolls every change back.
#[async_trait]
pub trait DeveloperUnitOfWork: Send {
    /// Find a developer by member id, locking it for the rest of the unit of work
    async fn find_by_member_id_for_update(
        &mut self,
        member_id: &str,
    ) -> DeveloperResult<Option<Developer>>;

    /// Insert a new developer
    ///
    /// Fails with `DuplicateMemberId` if the member id is already taken.
    async fn insert_developer(&mut self, developer: &Developer) -> DeveloperResult<()>;

    /// Persist the mutable fields of an existing developer
    async fn update_developer(&mut self, developer: &Developer) -> DeveloperResult<()>;

    /// Append a retirement snapshot
    async fn insert_retired(&mut self, retired: &RetiredDeveloper) -> DeveloperResult<()>;

    /// Commit every change made in this unit of work
    async fn commit(self: Box<Self>) -> DeveloperResult<()>;
}

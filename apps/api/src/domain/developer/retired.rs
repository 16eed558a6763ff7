use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Audit snapshot written when a developer retires
///
/// Snapshots are append-only: created once per retirement and never
/// updated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RetiredDeveloper {
    id: Uuid,
    member_id: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RetiredDeveloper {
    /// Creates a snapshot for the given member
    pub fn new(member_id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            member_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a snapshot from stored data
    pub fn from_persistence(
        id: Uuid,
        member_id: String,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            member_id,
            name,
            created_at,
            updated_at,
        }
    }
}

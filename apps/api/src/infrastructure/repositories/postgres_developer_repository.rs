use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::developer::value_objects::{
    DeveloperLevel, DeveloperSkillType, EmploymentStatus,
};
use crate::domain::developer::{Developer, RetiredDeveloper};
use crate::domain::errors::{DeveloperError, DeveloperResult};
use crate::domain::repositories::{DeveloperRepository, DeveloperUnitOfWork};

/// Row shape of the `developers` table
#[derive(Debug, sqlx::FromRow)]
struct DeveloperRow {
    id: Uuid,
    member_id: String,
    name: String,
    age: i32,
    developer_level: DeveloperLevel,
    developer_skill_type: DeveloperSkillType,
    experience_years: i32,
    status_code: EmploymentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DeveloperRow> for Developer {
    fn from(r: DeveloperRow) -> Self {
        Developer::from_persistence(
            r.id,
            r.member_id,
            r.name,
            r.age,
            r.developer_level,
            r.developer_skill_type,
            r.experience_years,
            r.status_code,
            r.created_at,
            r.updated_at,
        )
    }
}

/// Row shape of the `retired_developers` table
#[derive(Debug, sqlx::FromRow)]
struct RetiredDeveloperRow {
    id: Uuid,
    member_id: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RetiredDeveloperRow> for RetiredDeveloper {
    fn from(r: RetiredDeveloperRow) -> Self {
        RetiredDeveloper::from_persistence(r.id, r.member_id, r.name, r.created_at, r.updated_at)
    }
}

/// PostgreSQL implementation of DeveloperRepository
///
/// Enum columns map onto Postgres enum types declared in the migrations.
#[derive(Clone)]
pub struct PostgresDeveloperRepository {
    pool: PgPool,
}

impl PostgresDeveloperRepository {
    /// Creates a new PostgresDeveloperRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeveloperRepository for PostgresDeveloperRepository {
    async fn find_by_member_id(&self, member_id: &str) -> DeveloperResult<Option<Developer>> {
        let row = sqlx::query_as::<_, DeveloperRow>(
            r#"
            SELECT
                id, member_id, name, age,
                developer_level, developer_skill_type, experience_years,
                status_code, created_at, updated_at
            FROM developers
            WHERE member_id = $1
            "#,
        )
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DeveloperError::Storage(format!("Failed to find developer: {}", e)))?;

        Ok(row.map(Developer::from))
    }

    async fn find_by_status(&self, status: EmploymentStatus) -> DeveloperResult<Vec<Developer>> {
        let rows = sqlx::query_as::<_, DeveloperRow>(
            r#"
            SELECT
                id, member_id, name, age,
                developer_level, developer_skill_type, experience_years,
                status_code, created_at, updated_at
            FROM developers
            WHERE status_code = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DeveloperError::Storage(format!("Failed to find developers by status: {}", e))
        })?;

        Ok(rows.into_iter().map(Developer::from).collect())
    }

    async fn find_retired_by_member_id(
        &self,
        member_id: &str,
    ) -> DeveloperResult<Vec<RetiredDeveloper>> {
        let rows = sqlx::query_as::<_, RetiredDeveloperRow>(
            r#"
            SELECT id, member_id, name, created_at, updated_at
            FROM retired_developers
            WHERE member_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DeveloperError::Storage(format!("Failed to find retired developers: {}", e))
        })?;

        Ok(rows.into_iter().map(RetiredDeveloper::from).collect())
    }

    async fn begin(&self) -> DeveloperResult<Box<dyn DeveloperUnitOfWork>> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DeveloperError::Storage(format!("Failed to begin transaction: {}", e)))?;

        Ok(Box::new(PostgresDeveloperUnitOfWork { tx }))
    }
}

/// Unit of work backed by a SQLx transaction
///
/// SQLx rolls the transaction back when it is dropped uncommitted.
pub struct PostgresDeveloperUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl DeveloperUnitOfWork for PostgresDeveloperUnitOfWork {
    async fn find_by_member_id_for_update(
        &mut self,
        member_id: &str,
    ) -> DeveloperResult<Option<Developer>> {
        let row = sqlx::query_as::<_, DeveloperRow>(
            r#"
            SELECT
                id, member_id, name, age,
                developer_level, developer_skill_type, experience_years,
                status_code, created_at, updated_at
            FROM developers
            WHERE member_id = $1
            FOR UPDATE
            "#,
        )
        .bind(member_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| DeveloperError::Storage(format!("Failed to lock developer: {}", e)))?;

        Ok(row.map(Developer::from))
    }

    async fn insert_developer(&mut self, developer: &Developer) -> DeveloperResult<()> {
        sqlx::query(
            r#"
            INSERT INTO developers (
                id, member_id, name, age,
                developer_level, developer_skill_type, experience_years,
                status_code, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(developer.id())
        .bind(developer.member_id())
        .bind(developer.name())
        .bind(developer.age())
        .bind(developer.level())
        .bind(developer.skill_type())
        .bind(developer.experience_years())
        .bind(developer.status())
        .bind(developer.created_at())
        .bind(developer.updated_at())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DeveloperError::DuplicateMemberId(developer.member_id().to_string())
            }
            _ => DeveloperError::Storage(format!("Failed to insert developer: {}", e)),
        })?;

        Ok(())
    }

    async fn update_developer(&mut self, developer: &Developer) -> DeveloperResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE developers
            SET developer_level = $2,
                developer_skill_type = $3,
                experience_years = $4,
                status_code = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(developer.id())
        .bind(developer.level())
        .bind(developer.skill_type())
        .bind(developer.experience_years())
        .bind(developer.status())
        .bind(developer.updated_at())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| DeveloperError::Storage(format!("Failed to update developer: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DeveloperError::NotFound(developer.member_id().to_string()));
        }

        Ok(())
    }

    async fn insert_retired(&mut self, retired: &RetiredDeveloper) -> DeveloperResult<()> {
        sqlx::query(
            r#"
            INSERT INTO retired_developers (id, member_id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(retired.id())
        .bind(retired.member_id())
        .bind(retired.name())
        .bind(retired.created_at())
        .bind(retired.updated_at())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| {
            DeveloperError::Storage(format!("Failed to insert retired developer: {}", e))
        })?;

        Ok(())
    }

    async fn commit(self: Box<Self>) -> DeveloperResult<()> {
        self.tx
            .commit()
            .await
            .map_err(|e| DeveloperError::Storage(format!("Failed to commit transaction: {}", e)))
    }
}

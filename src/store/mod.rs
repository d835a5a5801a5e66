//! Persistence for student records: the data-access trait and its backends.

mod memory;
mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::{ensure_database_exists, PgStudentStore};

use crate::error::AppError;
use crate::model::{Student, StudentFields};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Narrow data-access interface over the students table.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All records ordered by id.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Insert a new record; the store assigns the id. `updated_at` starts out null.
    async fn insert(&self, fields: &StudentFields, created_at: DateTime<Utc>) -> Result<Student, AppError>;

    /// Replace the business fields of record `id`. Returns None when no such record exists.
    async fn update(
        &self,
        id: i64,
        fields: &StudentFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Student>, AppError>;

    /// Cheap liveness check used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}

//! Process-local backend. Ids start at 1 and are never reused.

use super::StudentStore;
use crate::error::AppError;
use crate::model::{Student, StudentFields};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStudentStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Student>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, fields: &StudentFields, created_at: DateTime<Utc>) -> Result<Student, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let student = Student {
            id: inner.last_id,
            name: fields.name.clone(),
            course: fields.course.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            created_at: Some(created_at),
            updated_at: None,
        };
        inner.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn update(
        &self,
        id: i64,
        fields: &StudentFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Student>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.name = fields.name.clone();
        row.course = fields.course.clone();
        row.email = fields.email.clone();
        row.phone = fields.phone.clone();
        row.updated_at = Some(updated_at);
        Ok(Some(row.clone()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

//! Student operations over a `StudentStore`: validate, persist, and map absence to errors.

use crate::clock::Clock;
use crate::config::student_rules;
use crate::error::AppError;
use crate::model::{Student, StudentFields};
use crate::service::RequestValidator;
use crate::store::StudentStore;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub struct StudentService;

impl StudentService {
    /// All records. An empty table is reported as `EmptyResult`.
    pub async fn list(store: &dyn StudentStore) -> Result<Vec<Student>, AppError> {
        let rows = store.find_all().await?;
        if rows.is_empty() {
            return Err(AppError::EmptyResult);
        }
        Ok(rows)
    }

    /// Check `body` against the student rules and extract the four business fields.
    pub fn validate(body: &Map<String, Value>) -> Result<StudentFields, AppError> {
        let mut values = RequestValidator::validate(body, &student_rules())?;
        Ok(StudentFields::from_values(&mut values))
    }

    /// Insert validated fields stamped with the current time. Returns the stored record.
    pub async fn create(
        store: &dyn StudentStore,
        clock: &dyn Clock,
        fields: &StudentFields,
    ) -> Result<Student, AppError> {
        let row = store.insert(fields, clock.now()).await?;
        tracing::info!(id = row.id, "student created");
        Ok(row)
    }

    /// Fetch one record by id.
    pub async fn read(store: &dyn StudentStore, id: i64) -> Result<Student, AppError> {
        store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Replace the business fields of an existing record and stamp `updated_at`.
    pub async fn update(
        store: &dyn StudentStore,
        clock: &dyn Clock,
        id: i64,
        fields: &StudentFields,
    ) -> Result<Student, AppError> {
        if store.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(id.to_string()));
        }
        let row = store
            .update(id, fields, clock.now())
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        tracing::info!(id = row.id, "student updated");
        Ok(row)
    }
}

impl StudentFields {
    /// Take the four fields out of a validated value map.
    fn from_values(values: &mut BTreeMap<String, String>) -> Self {
        let mut take = |k: &str| values.remove(k).unwrap_or_default();
        StudentFields {
            name: take("name"),
            course: take("course"),
            email: take("email"),
            phone: take("phone"),
        }
    }
}

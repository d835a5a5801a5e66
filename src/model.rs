//! The student record and its writable fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored student. `id` and `created_at` never change after insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Student {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    pub course: String,
    #[schema(format = "email")]
    pub email: String,
    #[schema(example = "1234567890")]
    pub phone: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The four business fields, only constructed from validated input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StudentFields {
    pub name: String,
    pub course: String,
    pub email: String,
    pub phone: String,
}

/// Request body accepted by create and update. Documentation only; handlers read the raw
/// object so that type errors surface as field messages.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct StudentInput {
    #[schema(max_length = 191)]
    name: String,
    #[schema(max_length = 191)]
    course: String,
    #[schema(format = "email", max_length = 191)]
    email: String,
    #[schema(pattern = "^[0-9]{10}$", example = "1234567890")]
    phone: String,
}

//! DDL for the students table. Idempotent: safe to run on every start.

use crate::error::AppError;
use crate::sql::{qualified_table, quoted, STUDENTS_TABLE};
use sqlx::PgPool;

/// Statements that create the schema and table, in execution order.
pub fn migration_statements(schema: &str) -> Vec<String> {
    let table = qualified_table(schema, STUDENTS_TABLE);
    vec![
        format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                "id" BIGSERIAL PRIMARY KEY,
                "name" VARCHAR(191) NOT NULL,
                "course" VARCHAR(191) NOT NULL,
                "email" VARCHAR(191) NOT NULL,
                "phone" VARCHAR(191) NOT NULL,
                "created_at" TIMESTAMPTZ,
                "updated_at" TIMESTAMPTZ
            )
            "#,
            table
        ),
    ]
}

/// Create the schema and students table if they do not exist.
pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    for sql in migration_statements(schema) {
        tracing::debug!(sql = %sql.trim(), "migrate");
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!(schema = %schema, "students table ready");
    Ok(())
}

//! PostgreSQL backend.

use super::StudentStore;
use crate::error::{AppError, ConfigError};
use crate::model::{Student, StudentFields};
use crate::sql;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
    schema: String,
}

impl PgStudentStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgStudentStore {
            pool,
            schema: schema.into(),
        }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let sql = sql::select_all(&self.schema);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let sql = sql::select_by_id(&self.schema);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(
        &self,
        fields: &StudentFields,
        created_at: DateTime<Utc>,
    ) -> Result<Student, AppError> {
        let sql = sql::insert(&self.schema);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&fields.name)
            .bind(&fields.course)
            .bind(&fields.email)
            .bind(&fields.phone)
            .bind(created_at)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::Persistence("insert returned no row".into()))?;
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        fields: &StudentFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Student>, AppError> {
        let sql = sql::update(&self.schema);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&fields.name)
            .bind(&fields.course)
            .bind(&fields.email)
            .bind(&fields.phone)
            .bind(updated_at)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) =
        parse_db_name_from_url(database_url).map_err(|e| AppError::Persistence(e.to_string()))?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Persistence(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", sql::quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into (URL of the `postgres` admin database, target database name).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let path_start = url.rfind('/').ok_or_else(|| ConfigError::InvalidVar {
        var: "DATABASE_URL",
        reason: "no database path".into(),
    })? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name() {
        let (admin, name) =
            parse_db_name_from_url("postgres://u:p@localhost:5432/students").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "students");
    }

    #[test]
    fn keeps_query_on_admin_url() {
        let (admin, name) =
            parse_db_name_from_url("postgres://localhost/school?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "school");
    }

    #[test]
    fn rejects_url_without_path() {
        assert!(matches!(
            parse_db_name_from_url("localhost"),
            Err(ConfigError::InvalidVar { var: "DATABASE_URL", .. })
        ));
    }

    #[tokio::test]
    async fn url_without_path_is_not_a_client_error() {
        let err = ensure_database_exists("localhost").await.unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}

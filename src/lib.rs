//! Student records API: validated CRUD over a single PostgreSQL table.

pub mod clock;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use config::{AppConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Student, StudentFields};
pub use openapi::ApiDoc;
pub use routes::{api_router, common_routes_with_ready, docs_routes, student_routes};
pub use service::{RequestValidator, StudentService};
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryStudentStore, PgStudentStore, StudentStore};

//! StudentService: validated CRUD over the configured store.

mod crud;
mod validation;
pub use crud::StudentService;
pub use validation::{is_valid_email, RequestValidator};

//! Student CRUD routes. `show` and `edit` share one lookup.

use crate::handlers::student::{edit, index, show, store, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(index).post(store))
        .route("/students/:id", get(show))
        .route("/students/:id/edit", get(edit).put(update))
        .with_state(state)
}

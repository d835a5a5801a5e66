//! Shared application state for all routes.

use crate::clock::{Clock, SystemClock};
use crate::store::StudentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// State backed by `store` and the wall clock.
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        AppState {
            store,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

//! Shared application state for all routes.

use std::sync::Arc;

use crate::repository::ProductRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

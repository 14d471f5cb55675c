use crate::clock::Clock;
use crate::storage::PointStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PointStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn PointStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

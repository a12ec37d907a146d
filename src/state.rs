use std::sync::Arc;

use crate::api::Simulator;

#[derive(Clone)]
pub struct AppState {
    pub simulator: Arc<Simulator>,
}

impl AppState {
    pub fn new(simulator: Simulator) -> Self {
        Self {
            simulator: Arc::new(simulator),
        }
    }
}

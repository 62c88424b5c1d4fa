use std::sync::Arc;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::ChartData;
use crate::services::chart_data;

/// Shared application state. Holds only configuration; every render
/// builds its own immutable snapshot from the data file, so there is no
/// cross-request chart state to keep in sync.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Load a fresh chart data snapshot from the configured data file.
    pub fn load_chart_data(&self) -> AppResult<ChartData> {
        chart_data::load_chart_data(&self.config.data_path)
    }
}

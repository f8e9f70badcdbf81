use std::sync::Arc;

use crate::application::services::SummaryPipeline;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummaryPipeline>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pipeline: Arc<SummaryPipeline>, settings: Settings) -> Self {
        Self {
            pipeline,
            settings: Arc::new(settings),
        }
    }
}

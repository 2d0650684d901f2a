use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::persistence::point::point_repository::InMemoryPointRepository;
use crate::domain::point::service::point_service::PointService;

#[derive(Clone)]
pub struct AppState {
    pub point_service: Arc<PointService<InMemoryPointRepository>>,
    /// Prefix of the alert headers and translation keys (e.g. `jhipsterVueApp`).
    pub app_name: Arc<str>,
}

pub fn build_app_state(config: &AppConfig) -> AppState {
    AppState {
        point_service: Arc::new(PointService::new(InMemoryPointRepository::new())),
        app_name: Arc::from(config.app_name.as_str()),
    }
}

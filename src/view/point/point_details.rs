use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use crate::core::client::point_client::PointApi;
use crate::core::persistence::point::point_entity::Point;
use crate::view::navigation::Navigator;
use crate::view::router::entities::POINT_ID_PARAM;
use crate::view::router::RouteParams;

/// Read-only view of a single point.
pub struct PointDetails {
    point_service: Arc<dyn PointApi>,
    navigator: Arc<dyn Navigator>,
    pub point: Point,
}

impl PointDetails {
    pub fn new(point_service: Arc<dyn PointApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            point_service,
            navigator,
            point: Point::default(),
        }
    }

    /// Loads the point named by the `pointId` parameter, if any.
    pub async fn on_enter(&mut self, params: &RouteParams) -> Result<()> {
        if let Some(id) = params.id(POINT_ID_PARAM)? {
            self.retrieve_point(id).await?;
        }
        Ok(())
    }

    /// On failure `point` keeps its previous value.
    pub async fn retrieve_point(&mut self, point_id: i64) -> Result<()> {
        match self.point_service.find(point_id).await {
            Ok(point) => {
                self.point = point;
                Ok(())
            }
            Err(err) => {
                warn!(point_id, error = %err, "Failed to retrieve Point");
                Err(err)
            }
        }
    }

    pub fn previous_state(&self) {
        self.navigator.go(-1);
    }
}

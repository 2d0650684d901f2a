use serde::Serialize;

use crate::core::persistence::point::point_entity::Point;

/// One page of points together with the total number of matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PointPage {
    pub items: Vec<Point>,
    pub total_count: u64,
}

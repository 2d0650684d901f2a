//! API route declarations (e.g., /api/*)

pub mod point_routes;

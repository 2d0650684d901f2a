//! Point entity management: a REST resource, the entity client, and the
//! list/detail/update view controllers with their route table.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod debug;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
pub mod view;

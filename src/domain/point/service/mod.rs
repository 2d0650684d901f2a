pub mod point_service;

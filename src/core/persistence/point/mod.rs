pub mod point_entity;
pub mod point_repository;

pub mod point_client;

pub mod page_request;
pub mod point_page;

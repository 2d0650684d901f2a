//! View controllers for the Point entity and the collaborators they consume.

pub mod i18n;
pub mod locale;
pub mod navigation;
pub mod notification;
pub mod point;
pub mod router;

pub mod dashboard;
pub mod footer;
pub mod header;
pub mod modals;
pub mod notification_center;

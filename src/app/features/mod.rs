pub mod admin;
pub mod notifications;
pub mod palette;
pub mod ui;

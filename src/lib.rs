pub mod app;
pub mod components;
pub mod config;
pub mod domain;
pub mod events;
pub mod infrastructure;
pub mod logging;
pub mod notifications;
pub mod palette;
pub mod storage;
pub mod theme;

pub mod admin;
pub mod models;

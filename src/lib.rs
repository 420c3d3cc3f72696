// Library root - exposes modules for integration tests

pub mod config;
pub mod database;
pub mod handlers;
pub mod logging;
pub mod models;

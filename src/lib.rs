// Library exports for integration tests
pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod portal;
pub mod startup;
pub mod templates;
pub mod view;

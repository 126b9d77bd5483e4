// src/lib.rs

pub mod analytics;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repos;
pub mod routes;
pub mod state;

pub use routes::create_router;

//! HTTP API: configuration, routing, identity resolution and response mapping.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;

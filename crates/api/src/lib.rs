//! HTTP API: server, routing, and request/response mapping for product cleaning.

pub mod app;
pub mod config;
pub mod middleware;

//! HTTP Handlers

pub mod file;
pub mod health;

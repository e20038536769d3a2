//! HTTP Layer

pub mod handlers;
pub mod routes;

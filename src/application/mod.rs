//! Application Layer
//!
//! Services that orchestrate domain rules for the presentation layer.

pub mod services;

//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **FileAccessService**: Authorization engine for stored files

pub mod file_access_service;

pub use file_access_service::{AccessGrant, FileAccessService};

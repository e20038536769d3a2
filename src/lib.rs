//! # Chat File Access
//!
//! Resource-scoped authorization for files stored by the chat server:
//! given a request for a file, decide whether the caller may retrieve it.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Read models, repository traits, access strategies
//! - **Application Layer**: The file access engine
//! - **Infrastructure Layer**: PostgreSQL repositories and metrics
//! - **Presentation Layer**: HTTP guard, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chat_file_access/
//! +-- config/         Configuration management
//! +-- domain/         Entities, repository traits, access strategies
//! +-- application/    FileAccessService
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common error type
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;

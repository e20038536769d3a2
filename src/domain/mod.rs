//! # Domain Layer
//!
//! The domain layer contains the file access rules. It is independent of any
//! external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Read models (File, Message, Channel, memberships, ReplayClip)
//!   and the repository traits used to load them
//! - **services**: Access strategies and the strategy registry

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;

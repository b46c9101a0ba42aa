//! # IIT Connect Core
//!
//! Core business logic and domain layer for the IIT Connect backend.
//! This crate contains the verification record entity, the verification
//! service, repository interfaces, and error types that form the foundation
//! of the email ownership verification subsystem.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;

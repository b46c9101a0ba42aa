//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the IIT Connect
//! backend. It provides concrete implementations for the trait seams the
//! core crate defines: MySQL-backed repositories for verification records
//! and profile flags, and SMTP email delivery for verification codes.
//!
//! ## Features
//!
//! - `mysql`: MySQL repository implementations via SQLx (default)
//! - `smtp-email`: SMTP email delivery via lettre (default); the mock
//!   sender is always available

use thiserror::Error;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email service module - outbound email providers
pub mod email;

/// Errors raised by infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Email error: {0}")]
    Email(String),
}

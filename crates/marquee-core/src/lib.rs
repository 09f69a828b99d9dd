//! # Marquee Core
//!
//! Core types, errors, and utilities for the Marquee API.
//!
//! This crate provides foundational types used throughout the Marquee application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing and verification (bcrypt)
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use marquee_core::errors::AppError;
//! use marquee_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Movie not found"));
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//! ```

pub mod errors;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use password::{PASSWORD_HASH_COST, hash_password, verify_password};

//! User data models and DTOs.
//!
//! - [`User`]: account row; the password hash is never serialized
//! - [`RegisterUserDto`]: self-registration
//! - [`LoginRequest`]: credentials exchanged for a token
//! - [`UpdateUserDto`]: partial profile update

pub use marquee_models::users::{LoginRequest, RegisterUserDto, UpdateUserDto, User};

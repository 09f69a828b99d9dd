//! # Marquee Models
//!
//! Domain models and DTOs for the Marquee API.
//!
//! Entities derive `sqlx::FromRow` and serialize with the public JSON shape:
//! camelCase fields and the primary key exposed as `_id`. Request DTOs derive
//! `validator::Validate` and are checked by the `ValidatedJson` extractor.
//!
//! # Modules
//!
//! - [`users`]: user accounts, registration and login payloads
//! - [`movies`]: movies and the movie write payload
//! - [`shows`]: shows, the show write payload and rating updates

pub mod movies;
pub mod shows;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use movies::{Movie, MovieDto};
pub use shows::{RatingDto, Show, ShowDto};
pub use users::{LoginRequest, RegisterUserDto, UpdateUserDto, User};

use validator::ValidationError;

/// Rejects lists containing blank entries.
pub(crate) fn validate_non_empty_items(items: &[String]) -> Result<(), ValidationError> {
    if items.iter().any(|item| item.trim().is_empty()) {
        let mut error = ValidationError::new("non_empty_items");
        error.message = Some("list entries must not be empty".into());
        return Err(error);
    }
    Ok(())
}

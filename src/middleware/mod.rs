//! Request extractors for authentication.
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>` (a bare token is accepted too)
//! 2. [`auth::AuthUser`] verifies the token and exposes its claims
//! 3. The handler applies the route's policy from `marquee_auth::policy`
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use marquee_auth::policy;
//!
//! async fn delete_movie(AuthUser(claims): AuthUser) -> Result<(), AppError> {
//!     policy::require(policy::can_delete_movie(&claims), policy::ADMIN_REQUIRED)?;
//!     // ...
//! }
//! ```

pub mod auth;

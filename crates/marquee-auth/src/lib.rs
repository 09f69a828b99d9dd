//! # Marquee Auth
//!
//! Authentication types, JWT utilities and authorization policies.
//!
//! - [`claims`]: the identity payload carried by session tokens
//! - [`jwt`]: token issuing and verification
//! - [`policy`]: one authorization predicate per protected route
//!
//! # Example
//!
//! ```ignore
//! use marquee_auth::{issue_token, verify_token, policy};
//! use marquee_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = issue_token(user_id, false, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert!(!policy::can_delete_movie(&claims));
//! ```

pub mod claims;
pub mod jwt;
pub mod policy;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{issue_token, verify_token};

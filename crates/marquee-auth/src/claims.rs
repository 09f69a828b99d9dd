//! The identity payload carried by session tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use marquee_core::AppError;

/// Claims embedded in every session token.
///
/// Serialized as `{"_id": "...", "isAdmin": false, "iat": ...}`. The admin
/// flag is a snapshot taken at login; promotions and demotions only apply to
/// tokens issued afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID
    #[serde(rename = "_id")]
    pub id: String,
    /// Admin flag at the time the token was issued
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Issued-at timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
    /// Expiration timestamp, present only when token expiry is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

impl Claims {
    pub fn new(user_id: Uuid, is_admin: bool) -> Self {
        Self {
            id: user_id.to_string(),
            is_admin,
            iat: None,
            exp: None,
        }
    }

    /// Parses the subject as a UUID.
    ///
    /// Tokens are only ever issued for UUID ids, so a failure here means the
    /// token was minted elsewhere with the same secret.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.id)
            .map_err(|_| AppError::unauthorized("Invalid token subject".to_string()))
    }

    pub fn is_user(&self, id: Uuid) -> bool {
        self.user_id().is_ok_and(|own| own == id)
    }
}

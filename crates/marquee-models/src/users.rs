//! User accounts and the payloads that create and change them.

use chrono::{DateTime, Utc};
use marquee_core::serde::deserialize_empty_string_as_none;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered user.
///
/// `password` holds the bcrypt hash and is never serialized.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[schema(write_only)]
    pub password: String,
    pub is_admin: bool,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Self-registration payload.
///
/// `isAdmin` is accepted from the client as-is. `profileImage` may be a URL,
/// an empty string or `null`; the latter two are stored as no image.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters long"))]
    pub password: String,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    #[validate(url(message = "profileImage must be a valid uri"))]
    pub profile_image: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters long"))]
    pub password: String,
}

/// Profile update. Absent fields keep their current value; a new password is
/// hashed before it is stored. The admin flag is not writable here.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "password must be at least 8 characters long"))]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
    #[validate(url(message = "profileImage must be a valid uri"))]
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "$2b$14$hash".to_string(),
            is_admin: false,
            profile_image: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_serialization_redacts_password() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("_id").is_some());
        assert_eq!(value["isAdmin"], json!(false));
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["profileImage"], json!(null));
    }

    #[test]
    fn test_register_valid() {
        let dto: RegisterUserDto = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "password1",
            "profileImage": "https://i.pravatar.cc/300"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.is_admin, None);
    }

    #[test]
    fn test_register_empty_profile_image_allowed() {
        let dto: RegisterUserDto = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "password1",
            "profileImage": ""
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.profile_image, None);
    }

    #[test]
    fn test_register_rejects_bad_fields() {
        let dto: RegisterUserDto = serde_json::from_value(json!({
            "name": "",
            "email": "not-an-email",
            "password": "short",
            "profileImage": "not a uri"
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("profile_image"));
    }

    #[test]
    fn test_login_requires_min_password() {
        let req = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "1234567".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_all_optional() {
        let dto: UpdateUserDto = serde_json::from_value(json!({})).unwrap();
        assert!(dto.validate().is_ok());

        let dto: UpdateUserDto = serde_json::from_value(json!({ "password": "short" })).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_ignores_admin_flag() {
        let dto: UpdateUserDto =
            serde_json::from_value(json!({ "name": "Grace", "isAdmin": true })).unwrap();
        assert_eq!(dto.name.as_deref(), Some("Grace"));
    }
}

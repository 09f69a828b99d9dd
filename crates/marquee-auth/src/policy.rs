//! Authorization policies, one predicate per protected route.
//!
//! | Route | Rule |
//! |-------|------|
//! | `GET /users` | admin |
//! | `GET /users/:id` | self or admin |
//! | `PUT /users/:id` | self or admin |
//! | `PATCH /users/:id` | admin |
//! | `DELETE /users/:id` | self or admin |
//! | `POST /movies` | any authenticated user |
//! | `PUT /movies/:id` | admin or owner of the movie |
//! | `DELETE /movies/:id` | admin |
//! | `PATCH /movies/:id` | any authenticated user |
//! | `POST`/`PUT`/`DELETE /shows` | admin |
//! | `PATCH /shows/:id/rating` | any authenticated user |
//!
//! Policies only look at the token claims. Existence checks against the
//! database stay in the handlers.

use uuid::Uuid;

use marquee_core::AppError;

use crate::claims::Claims;

pub const ADMIN_REQUIRED: &str = "User has no admin access";
pub const ACCESS_DENIED: &str = "Access denied";

fn is_self_or_admin(claims: &Claims, target: Uuid) -> bool {
    claims.is_admin || claims.is_user(target)
}

pub fn can_list_users(claims: &Claims) -> bool {
    claims.is_admin
}

pub fn can_view_user(claims: &Claims, target: Uuid) -> bool {
    is_self_or_admin(claims, target)
}

pub fn can_update_user(claims: &Claims, target: Uuid) -> bool {
    is_self_or_admin(claims, target)
}

pub fn can_toggle_admin(claims: &Claims) -> bool {
    claims.is_admin
}

pub fn can_delete_user(claims: &Claims, target: Uuid) -> bool {
    is_self_or_admin(claims, target)
}

/// Seeded movies have no owner and are editable by admins only.
pub fn can_update_movie(claims: &Claims, owner: Option<Uuid>) -> bool {
    claims.is_admin || owner.is_some_and(|owner| claims.is_user(owner))
}

/// Owners cannot delete their own movies.
pub fn can_delete_movie(claims: &Claims) -> bool {
    claims.is_admin
}

pub fn can_manage_shows(claims: &Claims) -> bool {
    claims.is_admin
}

/// Turns a policy decision into a `403 Forbidden`.
///
/// ```ignore
/// policy::require(policy::can_delete_movie(&claims), policy::ADMIN_REQUIRED)?;
/// ```
pub fn require(allowed: bool, message: &str) -> Result<(), AppError> {
    if allowed {
        Ok(())
    } else {
        Err(AppError::forbidden(message.to_string()))
    }
}

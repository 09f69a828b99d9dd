//! Admin account seeding.

use anyhow::anyhow;
use marquee_core::password::hash_password_async;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::SeedConfig;

/// Creates the bootstrap admin when the users table is empty.
///
/// Returns `true` when an account was inserted. Any existing user, admin or
/// not, makes this a no-op.
pub async fn ensure_default_admin(db: &PgPool, config: &SeedConfig) -> anyhow::Result<bool> {
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(db)
        .await?;

    if users > 0 {
        tracing::debug!(users, "Users present, skipping admin bootstrap");
        return Ok(false);
    }

    let id = insert_admin(
        db,
        &config.admin_name,
        &config.admin_email,
        &config.admin_password,
        config.admin_profile_image.as_deref(),
    )
    .await?;

    match id {
        Some(id) => {
            tracing::info!(user_id = %id, email = %config.admin_email, "Default admin created");
            Ok(true)
        }
        // Another instance seeded concurrently.
        None => Ok(false),
    }
}

/// Creates an admin account, failing if the email is already registered.
pub async fn create_admin(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
    profile_image: Option<&str>,
) -> anyhow::Result<Uuid> {
    insert_admin(db, name, email, password, profile_image)
        .await?
        .ok_or_else(|| anyhow!("User with this email already exists"))
}

async fn insert_admin(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
    profile_image: Option<&str>,
) -> anyhow::Result<Option<Uuid>> {
    let hashed_password = hash_password_async(password.to_string())
        .await
        .map_err(|e| anyhow!("Failed to hash password: {}", e.error))?;

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, password, is_admin, profile_image)
         VALUES ($1, $2, $3, TRUE, $4)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(&hashed_password)
    .bind(profile_image)
    .fetch_optional(db)
    .await?;

    Ok(id)
}

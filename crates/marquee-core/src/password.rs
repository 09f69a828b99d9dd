//! Password hashing with bcrypt.
//!
//! Hashing at [`PASSWORD_HASH_COST`] takes on the order of a second, so request
//! handlers use the `_async` variants, which move the work onto the blocking
//! thread pool.

use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt work factor used for every stored password.
pub const PASSWORD_HASH_COST: u32 = 14;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, PASSWORD_HASH_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}

pub async fn hash_password_async(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::internal_error(format!("Task join error: {}", e)))?
}

pub async fn verify_password_async(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::internal_error(format!("Task join error: {}", e)))?
}

use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use marquee_auth::issue_token;
use marquee_config::JwtConfig;
use marquee_core::AppError;
use marquee_core::password::{hash_password_async, verify_password_async};

use crate::metrics::{track_login_failure, track_login_success};
use crate::modules::users::model::{LoginRequest, RegisterUserDto, UpdateUserDto, User};

const USER_COLUMNS: &str = "id, name, email, password, is_admin, profile_image, created_at";

pub const USER_NOT_FOUND: &str = "No such user";

fn map_email_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AppError::conflict("User already exists".to_string());
    }
    AppError::database(e)
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register(db: &PgPool, dto: RegisterUserDto) -> Result<User, AppError> {
        if Self::find_by_email(db, &dto.email).await?.is_some() {
            return Err(AppError::conflict("User already exists".to_string()));
        }

        let hashed_password = hash_password_async(dto.password).await?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password, is_admin, profile_image)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(dto.is_admin.unwrap_or(false))
        .bind(&dto.profile_image)
        .fetch_one(db)
        .await
        .map_err(map_email_conflict)?;

        Ok(user)
    }

    /// Exact, case-sensitive lookup.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    /// Checks credentials and issues a token.
    ///
    /// Unknown email and wrong password fail with the same error.
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let Some(user) = Self::find_by_email(db, &dto.email).await? else {
            track_login_failure("unknown_email");
            return Err(AppError::invalid_credentials());
        };

        if !verify_password_async(dto.password, user.password.clone()).await? {
            track_login_failure("wrong_password");
            return Err(AppError::invalid_credentials());
        }

        let token = issue_token(user.id, user.is_admin, jwt_config)?;
        track_login_success();

        Ok(token)
    }

    #[instrument(skip(db))]
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))
    }

    pub async fn exists(db: &PgPool, id: Uuid) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(db)
                .await?;

        Ok(exists)
    }

    /// Fails with `404 No such user` when the account behind a token is gone.
    pub async fn ensure_exists(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        if Self::exists(db, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(anyhow!(USER_NOT_FOUND)))
        }
    }

    #[instrument(skip(db, dto))]
    pub async fn update_user(db: &PgPool, id: Uuid, dto: UpdateUserDto) -> Result<User, AppError> {
        let hashed_password = match dto.password {
            Some(password) => Some(hash_password_async(password).await?),
            None => None,
        };

        sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 password = COALESCE($4, password),
                 profile_image = COALESCE($5, profile_image)
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&dto.profile_image)
        .fetch_optional(db)
        .await
        .map_err(map_email_conflict)?
        .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))
    }

    /// Flips the target's admin flag in a single statement.
    #[instrument(skip(db))]
    pub async fn toggle_admin(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET is_admin = NOT is_admin WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))
    }

    /// Movies the user created and likes they left are kept.
    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "DELETE FROM users WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))
    }
}

use anyhow::Context;
use sqlx::PgPool;

use marquee_config::{CorsConfig, DatabaseConfig, JwtConfig, RateLimitConfig};
use marquee_db::{init_db_pool, run_migrations};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
}

/// Loads configuration, connects to the database and applies migrations.
///
/// Fails when `DATABASE_URL` or `JWT_SECRET` is missing or the database is
/// unreachable.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    let db = init_db_pool(&database_config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    Ok(AppState {
        db,
        jwt_config,
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
    })
}

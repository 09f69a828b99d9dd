use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use marquee_core::AppError;

use crate::modules::shows::model::{Show, ShowDto};

const SHOW_COLUMNS: &str = "id, title, plot, release_date, genre, seasons, episodes, youtube_id, \
     likes, cast_members, rating, created_at";

pub const SHOW_NOT_FOUND: &str = "Show not found";

fn not_found() -> AppError {
    AppError::not_found(anyhow!(SHOW_NOT_FOUND))
}

pub struct ShowService;

impl ShowService {
    /// Newest first.
    #[instrument(skip(db))]
    pub async fn get_shows(db: &PgPool) -> Result<Vec<Show>, AppError> {
        let shows = sqlx::query_as::<_, Show>(&format!(
            "SELECT {SHOW_COLUMNS} FROM shows ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(shows)
    }

    #[instrument(skip(db))]
    pub async fn get_show(db: &PgPool, id: Uuid) -> Result<Show, AppError> {
        sqlx::query_as::<_, Show>(&format!("SELECT {SHOW_COLUMNS} FROM shows WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(db))]
    pub async fn create_show(db: &PgPool, dto: ShowDto) -> Result<Show, AppError> {
        let show = sqlx::query_as::<_, Show>(&format!(
            "INSERT INTO shows
                 (title, plot, release_date, genre, seasons, episodes, youtube_id, cast_members, rating)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {SHOW_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.plot)
        .bind(dto.release_date)
        .bind(&dto.genre)
        .bind(dto.seasons)
        .bind(dto.episodes)
        .bind(&dto.youtube_id)
        .bind(&dto.cast)
        .bind(dto.rating)
        .fetch_one(db)
        .await?;

        Ok(show)
    }

    /// Replaces the writable fields. An absent rating keeps the stored one.
    #[instrument(skip(db))]
    pub async fn update_show(db: &PgPool, id: Uuid, dto: ShowDto) -> Result<Show, AppError> {
        sqlx::query_as::<_, Show>(&format!(
            "UPDATE shows
             SET title = $2, plot = $3, release_date = $4, genre = $5, seasons = $6,
                 episodes = $7, youtube_id = $8, cast_members = $9,
                 rating = COALESCE($10, rating)
             WHERE id = $1
             RETURNING {SHOW_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.plot)
        .bind(dto.release_date)
        .bind(&dto.genre)
        .bind(dto.seasons)
        .bind(dto.episodes)
        .bind(&dto.youtube_id)
        .bind(&dto.cast)
        .bind(dto.rating)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)
    }

    #[instrument(skip(db))]
    pub async fn update_rating(db: &PgPool, id: Uuid, rating: f64) -> Result<Show, AppError> {
        sqlx::query_as::<_, Show>(&format!(
            "UPDATE shows SET rating = $2 WHERE id = $1 RETURNING {SHOW_COLUMNS}"
        ))
        .bind(id)
        .bind(rating)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)
    }

    #[instrument(skip(db))]
    pub async fn delete_show(db: &PgPool, id: Uuid) -> Result<Show, AppError> {
        sqlx::query_as::<_, Show>(&format!(
            "DELETE FROM shows WHERE id = $1 RETURNING {SHOW_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)
    }
}

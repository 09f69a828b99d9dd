use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use marquee_core::AppError;

use crate::modules::movies::model::{Movie, MovieDto};

const MOVIE_COLUMNS: &str =
    "id, title, plot, poster, release_date, genre, youtube_id, likes, rating, user_id, created_at";

pub const MOVIE_NOT_FOUND: &str = "Movie not found";

fn not_found() -> AppError {
    AppError::not_found(anyhow!(MOVIE_NOT_FOUND))
}

pub struct MovieService;

impl MovieService {
    /// Newest first.
    #[instrument(skip(db))]
    pub async fn get_movies(db: &PgPool) -> Result<Vec<Movie>, AppError> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(movies)
    }

    #[instrument(skip(db))]
    pub async fn get_movie(db: &PgPool, id: Uuid) -> Result<Movie, AppError> {
        sqlx::query_as::<_, Movie>(&format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)
    }

    /// Exact, case-sensitive match. No matches is an empty list.
    #[instrument(skip(db))]
    pub async fn get_movies_by_genre(db: &PgPool, genre: &str) -> Result<Vec<Movie>, AppError> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE genre = $1 ORDER BY created_at DESC"
        ))
        .bind(genre)
        .fetch_all(db)
        .await?;

        Ok(movies)
    }

    #[instrument(skip(db))]
    pub async fn create_movie(db: &PgPool, owner: Uuid, dto: MovieDto) -> Result<Movie, AppError> {
        let movie = sqlx::query_as::<_, Movie>(&format!(
            "INSERT INTO movies (title, plot, poster, release_date, genre, youtube_id, rating, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.plot)
        .bind(&dto.poster)
        .bind(dto.release_date)
        .bind(&dto.genre)
        .bind(&dto.youtube_id)
        .bind(dto.rating)
        .bind(owner)
        .fetch_one(db)
        .await?;

        Ok(movie)
    }

    /// Replaces the writable fields. An absent rating keeps the stored one;
    /// owner and likes are untouched.
    #[instrument(skip(db))]
    pub async fn update_movie(db: &PgPool, id: Uuid, dto: MovieDto) -> Result<Movie, AppError> {
        sqlx::query_as::<_, Movie>(&format!(
            "UPDATE movies
             SET title = $2, plot = $3, poster = $4, release_date = $5, genre = $6,
                 youtube_id = $7, rating = COALESCE($8, rating)
             WHERE id = $1
             RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.plot)
        .bind(&dto.poster)
        .bind(dto.release_date)
        .bind(&dto.genre)
        .bind(&dto.youtube_id)
        .bind(dto.rating)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)
    }

    #[instrument(skip(db))]
    pub async fn delete_movie(db: &PgPool, id: Uuid) -> Result<Movie, AppError> {
        sqlx::query_as::<_, Movie>(&format!(
            "DELETE FROM movies WHERE id = $1 RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)
    }

    /// Adds `user_id` to the likes if absent, removes it otherwise.
    ///
    /// A single statement, so concurrent toggles never duplicate or lose an
    /// entry.
    #[instrument(skip(db))]
    pub async fn toggle_like(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<Movie, AppError> {
        sqlx::query_as::<_, Movie>(&format!(
            "UPDATE movies
             SET likes = CASE
                 WHEN $2 = ANY(likes) THEN array_remove(likes, $2)
                 ELSE array_append(likes, $2)
             END
             WHERE id = $1
             RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)
    }
}

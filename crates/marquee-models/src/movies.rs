//! Movies.

use chrono::{DateTime, NaiveDate, Utc};
use marquee_core::serde::deserialize_date;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A movie in the catalog.
///
/// `likes` holds the ids of users who liked the movie, each at most once.
/// `user_id` is the creator; seeded movies have none.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub plot: String,
    pub poster: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub youtube_id: String,
    pub likes: Vec<Uuid>,
    pub rating: Option<f64>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing a movie.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "plot must not be empty"))]
    pub plot: String,
    #[validate(length(min = 1, message = "poster must not be empty"))]
    pub poster: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub release_date: NaiveDate,
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: String,
    #[validate(length(min = 1, message = "youtubeId must not be empty"))]
    pub youtube_id: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10"))]
    pub rating: Option<f64>,
}

//! Shows and show rating updates.

use chrono::{DateTime, NaiveDate, Utc};
use marquee_core::serde::deserialize_date;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validate_non_empty_items;

/// A show in the catalog.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub plot: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub seasons: i32,
    pub episodes: i32,
    /// Trailer ids, in display order
    pub youtube_id: Vec<String>,
    pub likes: Vec<Uuid>,
    #[sqlx(rename = "cast_members")]
    pub cast: Vec<String>,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing a show.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShowDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "plot must not be empty"))]
    pub plot: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub release_date: NaiveDate,
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: String,
    #[validate(range(min = 0, message = "seasons must not be negative"))]
    pub seasons: i32,
    #[validate(range(min = 0, message = "episodes must not be negative"))]
    pub episodes: i32,
    #[validate(custom(function = "validate_non_empty_items"))]
    pub youtube_id: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_non_empty_items"))]
    pub cast: Vec<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10"))]
    pub rating: Option<f64>,
}

/// Body of `PATCH /shows/:id/rating`.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct RatingDto {
    #[serde(default)]
    #[validate(
        required(message = "Rating is required"),
        range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10")
    )]
    pub rating: Option<f64>,
}

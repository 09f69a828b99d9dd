//! Seed data and seeding configuration.

use chrono::NaiveDate;
use uuid::Uuid;

pub const DEFAULT_ADMIN_NAME: &str = "Admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@gmail.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234567890";
pub const DEFAULT_ADMIN_PROFILE_IMAGE: &str = "https://i.pravatar.cc/300?img=1";

/// Seed data for a movie row.
pub struct MovieSeed {
    pub title: String,
    pub plot: String,
    pub poster: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub youtube_id: String,
    pub rating: Option<f64>,
    pub user_id: Option<Uuid>,
}

/// Seed data for a show row.
pub struct ShowSeed {
    pub title: String,
    pub plot: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub seasons: i32,
    pub episodes: i32,
    pub youtube_id: Vec<String>,
    pub cast: Vec<String>,
    pub rating: Option<f64>,
}

/// Startup seeding configuration.
///
/// | Variable | Default |
/// |----------|---------|
/// | `SEED_ADMIN_NAME` | `Admin` |
/// | `SEED_ADMIN_EMAIL` | `admin@gmail.com` |
/// | `SEED_ADMIN_PASSWORD` | `1234567890` |
/// | `SEED_ADMIN_PROFILE_IMAGE` | `https://i.pravatar.cc/300?img=1` |
/// | `SEED_SAMPLE_MOVIES` | `false` |
/// | `SEED_SAMPLE_MOVIE_COUNT` | `20` |
#[derive(Clone, Debug, PartialEq)]
pub struct SeedConfig {
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_profile_image: Option<String>,
    pub sample_movies: bool,
    pub sample_movie_count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_name: DEFAULT_ADMIN_NAME.to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            admin_profile_image: Some(DEFAULT_ADMIN_PROFILE_IMAGE.to_string()),
            sample_movies: false,
            sample_movie_count: 20,
        }
    }
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            admin_name: non_blank("SEED_ADMIN_NAME").unwrap_or(defaults.admin_name),
            admin_email: non_blank("SEED_ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_password: non_blank("SEED_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            admin_profile_image: non_blank("SEED_ADMIN_PROFILE_IMAGE")
                .or(defaults.admin_profile_image),
            sample_movies: non_blank("SEED_SAMPLE_MOVIES")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1"))
                .unwrap_or(defaults.sample_movies),
            sample_movie_count: non_blank("SEED_SAMPLE_MOVIE_COUNT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.sample_movie_count),
        }
    }
}

//! Database seeding.
//!
//! - [`users`]: the bootstrap admin account and admin creation
//! - [`movies`] / [`shows`]: fake catalog data, generated in parallel with
//!   Rayon and inserted with multi-row `INSERT` statements

pub mod models;
pub mod movies;
pub mod shows;
pub mod users;

use std::time::Instant;

use sqlx::PgPool;

pub use models::SeedConfig;
pub use movies::{clear_movies, seed_movies, seed_sample_movies};
pub use shows::{clear_shows, seed_shows};
pub use users::{create_admin, ensure_default_admin};

/// Deletes every movie and show. Users are kept.
pub async fn clear_catalog(db: &PgPool) -> anyhow::Result<(u64, u64)> {
    let start_time = Instant::now();
    println!("🗑️  Clearing catalog...");

    let movies = clear_movies(db).await?;
    let shows = clear_shows(db).await?;

    println!(
        "✅ Removed {} movies and {} shows in {:?}",
        movies,
        shows,
        start_time.elapsed()
    );

    Ok((movies, shows))
}

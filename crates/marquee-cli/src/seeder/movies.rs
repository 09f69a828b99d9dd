//! Movie seeding.

use std::time::Instant;

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::lorem::en::{Sentence, Words};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::models::{MovieSeed, SeedConfig};

pub(crate) const GENRES: &[&str] = &[
    "Action",
    "Comedy",
    "Drama",
    "Horror",
    "Sci-Fi",
    "Thriller",
    "Animation",
    "Documentary",
];

const YOUTUBE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

pub(crate) fn fake_title() -> String {
    let words: Vec<String> = Words(1..4).fake();
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn fake_release_date() -> NaiveDate {
    let year: i32 = (1960..2025).fake();
    let month: u32 = (1..13).fake();
    let day: u32 = (1..29).fake();
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn fake_genre() -> String {
    GENRES[(0..GENRES.len()).fake::<usize>()].to_string()
}

pub(crate) fn fake_youtube_id() -> String {
    (0..11)
        .map(|_| YOUTUBE_ALPHABET[(0..YOUTUBE_ALPHABET.len()).fake::<usize>()] as char)
        .collect()
}

/// One decimal place, 0 to 10.
pub(crate) fn fake_rating() -> Option<f64> {
    let tenths: u32 = (0..101).fake();
    Some(f64::from(tenths) / 10.0)
}

/// Generates movie rows in parallel. `owner` becomes every movie's `userId`.
pub fn generate_movies(count: usize, owner: Option<Uuid>) -> Vec<MovieSeed> {
    (0..count)
        .into_par_iter()
        .map(|_| MovieSeed {
            title: fake_title(),
            plot: Sentence(8..16).fake(),
            poster: format!("https://picsum.photos/seed/{}/300/450", Uuid::new_v4()),
            release_date: fake_release_date(),
            genre: fake_genre(),
            youtube_id: fake_youtube_id(),
            rating: fake_rating(),
            user_id: owner,
        })
        .collect()
}

/// Seeds `count` fake movies without an owner.
pub async fn seed_movies(db: &PgPool, count: usize) -> anyhow::Result<Vec<Uuid>> {
    let start_time = Instant::now();
    println!("🎬 Seeding {} movies...", count);

    let movies = generate_movies(count, None);
    let ids = insert_movies_batch(db, &movies).await?;

    println!(
        "   ✓ Inserted {} movies in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Seeds sample movies at startup when enabled and the table is empty.
///
/// Returns the number of rows inserted.
pub async fn seed_sample_movies(db: &PgPool, config: &SeedConfig) -> anyhow::Result<usize> {
    if !config.sample_movies {
        return Ok(0);
    }

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(db)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let movies = generate_movies(config.sample_movie_count, None);
    let ids = insert_movies_batch(db, &movies).await?;
    tracing::info!(count = ids.len(), "Sample movies seeded");

    Ok(ids.len())
}

/// Inserts movies in one transaction, using multi-row `INSERT` statements.
pub async fn insert_movies_batch(db: &PgPool, movies: &[MovieSeed]) -> anyhow::Result<Vec<Uuid>> {
    let mut tx = db.begin().await?;

    // 8 params per movie
    const BATCH_SIZE: usize = 1000;
    let mut all_ids = Vec::with_capacity(movies.len());

    for chunk in movies.chunks(BATCH_SIZE) {
        let ids = insert_movies_chunk(&mut tx, chunk).await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_movies_chunk(
    tx: &mut Transaction<'_, Postgres>,
    movies: &[MovieSeed],
) -> anyhow::Result<Vec<Uuid>> {
    if movies.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO movies (title, plot, poster, release_date, genre, youtube_id, rating, user_id) VALUES ",
    );

    for i in 0..movies.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 8;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${}, ${}, ${})",
            p + 1,
            p + 2,
            p + 3,
            p + 4,
            p + 5,
            p + 6,
            p + 7,
            p + 8
        ));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar::<_, Uuid>(&query);
    for movie in movies {
        q = q
            .bind(&movie.title)
            .bind(&movie.plot)
            .bind(&movie.poster)
            .bind(movie.release_date)
            .bind(&movie.genre)
            .bind(&movie.youtube_id)
            .bind(movie.rating)
            .bind(movie.user_id);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}

pub async fn clear_movies(db: &PgPool) -> anyhow::Result<u64> {
    let deleted = sqlx::query("DELETE FROM movies")
        .execute(db)
        .await?
        .rows_affected();
    println!("   ✓ Deleted {} movies", deleted);
    Ok(deleted)
}

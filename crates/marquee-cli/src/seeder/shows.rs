//! Show seeding.

use std::time::Instant;

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::models::ShowSeed;
use super::movies::{fake_genre, fake_rating, fake_release_date, fake_title, fake_youtube_id};

pub fn generate_shows(count: usize) -> Vec<ShowSeed> {
    (0..count)
        .into_par_iter()
        .map(|_| {
            let seasons: i32 = (1..9).fake();
            let per_season: i32 = (6..25).fake();
            let trailers: usize = (1..4).fake();
            let cast_size: usize = (2..7).fake();

            ShowSeed {
                title: fake_title(),
                plot: Sentence(8..16).fake(),
                release_date: fake_release_date(),
                genre: fake_genre(),
                seasons,
                episodes: seasons * per_season,
                youtube_id: (0..trailers).map(|_| fake_youtube_id()).collect(),
                cast: (0..cast_size).map(|_| Name().fake()).collect(),
                rating: fake_rating(),
            }
        })
        .collect()
}

pub async fn seed_shows(db: &PgPool, count: usize) -> anyhow::Result<Vec<Uuid>> {
    let start_time = Instant::now();
    println!("📺 Seeding {} shows...", count);

    let shows = generate_shows(count);
    let ids = insert_shows_batch(db, &shows).await?;

    println!(
        "   ✓ Inserted {} shows in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn insert_shows_batch(db: &PgPool, shows: &[ShowSeed]) -> anyhow::Result<Vec<Uuid>> {
    let mut tx = db.begin().await?;

    // 9 params per show
    const BATCH_SIZE: usize = 1000;
    let mut all_ids = Vec::with_capacity(shows.len());

    for chunk in shows.chunks(BATCH_SIZE) {
        let ids = insert_shows_chunk(&mut tx, chunk).await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_shows_chunk(
    tx: &mut Transaction<'_, Postgres>,
    shows: &[ShowSeed],
) -> anyhow::Result<Vec<Uuid>> {
    if shows.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO shows (title, plot, release_date, genre, seasons, episodes, youtube_id, cast_members, rating) VALUES ",
    );

    for i in 0..shows.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let placeholders: Vec<String> = (1..=9).map(|n| format!("${}", i * 9 + n)).collect();
        query.push('(');
        query.push_str(&placeholders.join(", "));
        query.push(')');
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar::<_, Uuid>(&query);
    for show in shows {
        q = q
            .bind(&show.title)
            .bind(&show.plot)
            .bind(show.release_date)
            .bind(&show.genre)
            .bind(show.seasons)
            .bind(show.episodes)
            .bind(&show.youtube_id)
            .bind(&show.cast)
            .bind(show.rating);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}

pub async fn clear_shows(db: &PgPool) -> anyhow::Result<u64> {
    let deleted = sqlx::query("DELETE FROM shows")
        .execute(db)
        .await?
        .rows_affected();
    println!("   ✓ Deleted {} shows", deleted);
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shows() {
        let shows = generate_shows(10);
        assert_eq!(shows.len(), 10);
        for show in &shows {
            assert!(show.seasons >= 1);
            assert!(show.episodes >= show.seasons);
            assert!(!show.youtube_id.is_empty());
            assert!(show.cast.len() >= 2);
        }
    }
}

//! # Marquee CLI
//!
//! Admin bootstrap and database seeding for Marquee.
//!
//! The server calls [`seeder::ensure_default_admin`] and
//! [`seeder::seed_sample_movies`] at startup; the `marquee-cli` binary
//! exposes the same seeders as subcommands.
//!
//! ## Usage
//!
//! ```ignore
//! use marquee_cli::seeder::{self, SeedConfig};
//!
//! let config = SeedConfig::from_env();
//! seeder::ensure_default_admin(&pool, &config).await?;
//! seeder::seed_movies(&pool, 50).await?;
//! ```

pub mod seeder;

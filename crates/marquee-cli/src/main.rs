use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use marquee_cli::seeder;
use marquee_config::DatabaseConfig;
use marquee_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "marquee-cli")]
#[command(about = "Marquee CLI - Administrative tools for Marquee", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Profile image URL
        #[arg(long)]
        profile_image: Option<String>,
    },
    /// Seed the database with fake movies
    SeedMovies {
        /// Number of movies to create
        #[arg(short = 'c', long, default_value = "50")]
        count: usize,
    },
    /// Seed the database with fake shows
    SeedShows {
        /// Number of shows to create
        #[arg(short = 'c', long, default_value = "20")]
        count: usize,
    },
    /// Delete all movies and shows (keeps users)
    ClearCatalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = init_db_pool(&DatabaseConfig::from_env()?)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool).await?;

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
            profile_image,
        } => handle_create_admin(&pool, name, email, password, profile_image).await,
        Commands::SeedMovies { count } => {
            let ids = seeder::seed_movies(&pool, count).await?;
            println!("✅ Created {} movies", ids.len());
            Ok(())
        }
        Commands::SeedShows { count } => {
            let ids = seeder::seed_shows(&pool, count).await?;
            println!("✅ Created {} shows", ids.len());
            Ok(())
        }
        Commands::ClearCatalog => seeder::clear_catalog(&pool).await.map(|_| ()),
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    profile_image: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    if password.len() < 8 {
        anyhow::bail!("Password must be at least 8 characters long");
    }

    let id = seeder::create_admin(pool, &name, &email, &password, profile_image.as_deref())
        .await
        .context("Error creating admin")?;

    println!("\n✅ Admin created successfully!");
    println!("   Id: {}", id);
    println!("   Email: {}", email);
    println!("   Name: {}", name);

    Ok(())
}

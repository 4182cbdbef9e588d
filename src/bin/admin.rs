//! CLI administration tool for shorturl.
//!
//! Works with short links and the database directly against PostgreSQL,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for the URL when omitted)
//! cargo run --bin admin -- link create https://www.freecodecamp.org
//!
//! # Show the URL stored under a code
//! cargo run --bin admin -- link show 1
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see [`shorturl::config`]); values are validated the
//! same way. The admin tool always talks to PostgreSQL:
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `DNS_TIMEOUT_MS` (optional): host lookup bound for `link create`
//! - `ALLOCATION_MAX_ATTEMPTS` (optional): code conflicts tolerated per allocation

use shorturl::application::services::{LinkService, UrlValidator};
use shorturl::config::{self, Config};
use shorturl::error::AppError;
use shorturl::infrastructure::dns::SystemResolver;
use shorturl::infrastructure::persistence::{MIGRATOR, PgLinkRepository};
use shorturl::utils::short_code::parse_short_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create and inspect short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL
    Create {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the URL stored under a code
    Show {
        /// Short code
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    let database_url = match config.database_url {
        Some(ref url) => url.clone(),
        None => Config::load_database_url()?,
    };

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, &config).await?,
        Commands::Stats => handle_stats(&pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Builds the same service the HTTP server uses, over the given pool.
fn link_service(
    pool: &PgPool,
    config: &Config,
) -> LinkService<PgLinkRepository, SystemResolver> {
    let repo = PgLinkRepository::with_max_attempts(
        Arc::new(pool.clone()),
        config.allocation_max_attempts,
    );
    let validator = UrlValidator::new(Arc::new(SystemResolver::new()), config.dns_timeout());

    LinkService::new(Arc::new(repo), validator)
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, config: &Config) -> Result<()> {
    let service = link_service(pool, config);

    match action {
        LinkAction::Create { url, yes } => create_link(&service, url, yes).await?,
        LinkAction::Show { code } => show_link(&service, &code).await?,
    }

    Ok(())
}

/// Validates and stores a URL, printing the allocated code.
///
/// # Flow
///
/// 1. Prompt for the URL (or use provided)
/// 2. Confirm creation (unless `--yes` flag)
/// 3. Validate syntax and host resolvability
/// 4. Allocate the next code
async fn create_link(
    service: &LinkService<PgLinkRepository, SystemResolver>,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    if !skip_confirm {
        println!("  URL: {}", url.cyan());
        println!();

        let confirmed = Confirm::new()
            .with_prompt("Create short link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.create_short_link(&url).await {
        Ok(link) => {
            println!();
            println!("{}", "✅ Short link created".green().bold());
            println!("  Code: {}", link.code.to_string().bright_white().bold());
            println!("  URL:  {}", link.original_url.cyan());
            println!(
                "  Path: {}",
                format!("/api/shorturl/{}", link.code).bright_black()
            );
            println!();
            Ok(())
        }
        Err(AppError::InvalidUrl { reason }) => {
            println!("{} {}", "❌ Invalid URL:".red().bold(), reason);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create link: {}", e)),
    }
}

/// Prints the URL stored under `code`.
async fn show_link(
    service: &LinkService<PgLinkRepository, SystemResolver>,
    code: &str,
) -> Result<()> {
    let Some(parsed) = parse_short_code(code) else {
        println!("{} {}", "⚠️  Not a short code:".yellow(), code);
        return Ok(());
    };

    match service.resolve(parsed).await {
        Ok(link) => {
            println!(
                "  {} → {}",
                link.code.to_string().bright_white().bold(),
                link.original_url.cyan()
            );
        }
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "⚠️  No link with code".yellow(), parsed);
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of links
/// - Last allocated code
async fn handle_stats(pool: &PgPool, config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = link_service(pool, config)
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let last_code: Option<i64> =
        sqlx::query_scalar("SELECT last_code FROM link_sequence WHERE id = 1")
            .fetch_optional(pool)
            .await?;

    println!(
        "  Links:     {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Last code: {}",
        last_code.unwrap_or(0).to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            MIGRATOR
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

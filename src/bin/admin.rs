//! CLI administration tool for snaplink.
//!
//! Inspects and removes short URLs directly in PostgreSQL without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all short URLs
//! cargo run --bin admin -- list
//!
//! # Show statistics for one code
//! cargo run --bin admin -- stats promo
//!
//! # Delete a code (asks for confirmation unless --yes)
//! cargo run --bin admin -- delete promo
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use snaplink::config::Config;
use snaplink::domain::repositories::UrlRepository;
use snaplink::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing snaplink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all short URLs
    List,

    /// Show statistics for a short code
    Stats {
        /// Short code to inspect
        code: String,
    },

    /// Delete a short code
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let repo = PgUrlRepository::new(Arc::new(pool));

    match cli.command {
        Commands::List => list_urls(&repo).await?,
        Commands::Stats { code } => show_stats(&repo, &code).await?,
        Commands::Delete { code, yes } => delete_url(&repo, &code, yes).await?,
        Commands::Db { action } => handle_db_action(action, &repo).await?,
    }

    Ok(())
}

/// Prints every record as a table.
///
/// ```text
/// 📋 Short URLs
///
///   Code       Clicks   Created            Long URL
///   ─────────────────────────────────────────────────────────────
///   promo      12       2024-01-15 10:30   https://example.com/a/b
/// ```
async fn list_urls(repo: &PgUrlRepository) -> Result<()> {
    println!("{}", "📋 Short URLs".bright_blue().bold());
    println!();

    let mut records = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        return Ok(());
    }

    records.sort_by_key(|r| r.created_at);

    println!(
        "  {:<10} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<10} {:<8} {:<18} {}",
            record.short_code.cyan(),
            record.clicks.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.long_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints click statistics for one code without counting a click.
async fn show_stats(repo: &PgUrlRepository, code: &str) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let record = repo
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Short code not found")?;

    let last_clicked = record
        .last_clicked_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!("  Code:         {}", record.short_code.cyan());
    println!("  Long URL:     {}", record.long_url);
    println!(
        "  Clicks:       {}",
        record.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:      {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("  Last clicked: {}", last_clicked.bright_black());
    println!();

    Ok(())
}

/// Deletes a code after confirmation (default: No).
async fn delete_url(repo: &PgUrlRepository, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Short URL".bright_blue().bold());
    println!();

    let record = repo
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Short code not found")?;

    println!("  Code:     {}", record.short_code.cyan());
    println!("  Long URL: {}", record.long_url);
    println!("  Clicks:   {}", record.clicks.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete: {}", e))?;

    if deleted {
        println!("{}", "✅ Short URL deleted".green().bold());
    } else {
        println!("{}", "⚠️  Short code was already gone".yellow());
    }
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, repo: &PgUrlRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repo.ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}

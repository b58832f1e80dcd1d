//! CLI administration tool for blog-catalog.
//!
//! Provides commands for managing users and API tokens, viewing catalog
//! statistics, and performing database checks without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Register a user and print a first API token
//! cargo run --bin admin -- user create --username mluukkai --name "Matti Luukkainen"
//!
//! # Issue another token for an existing user
//! cargo run --bin admin -- token create --username mluukkai --name "Laptop"
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Laptop"
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET`: must match the server's value for issued tokens to work

use blog_catalog::application::services::{AuthService, StatsService, UserService};
use blog_catalog::config::Config;
use blog_catalog::domain::repositories::{ApiToken, TokenRepository};
use blog_catalog::infrastructure::persistence::{
    PgBlogRepository, PgTokenRepository, PgUserRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing blog-catalog.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show catalog statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a user and issue its first API token
    Create {
        /// Unique login name (at least 3 characters)
        #[arg(short, long)]
        username: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List all users
    List,
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token for a user
    Create {
        /// Owner of the token
        #[arg(short, long)]
        username: String,

        /// Token name (e.g., "Laptop", "CI")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::User { action } => handle_user_action(action, pool).await?,
        Commands::Token { action } => handle_token_action(action, pool).await?,
        Commands::Stats => handle_stats(pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn signing_secret() -> Result<String> {
    let secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;
    anyhow::ensure!(!secret.is_empty(), "TOKEN_SIGNING_SECRET must not be empty");
    Ok(secret)
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: Arc<PgPool>) -> Result<()> {
    let users = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));

    match action {
        UserAction::Create { username, name } => {
            let auth = AuthService::new(
                Arc::new(PgTokenRepository::new(pool)),
                signing_secret()?,
            );
            create_user(&users, &auth, username, name).await?;
        }
        UserAction::List => list_users(&users).await?,
    }

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(pool.clone()));

    match action {
        TokenAction::Create {
            username,
            name,
            token,
            yes,
        } => {
            let users = UserService::new(Arc::new(PgUserRepository::new(pool)));
            let auth = AuthService::new(repo, signing_secret()?);
            create_token(&users, &auth, username, name, token, yes).await?;
        }
        TokenAction::List => {
            list_tokens(repo).await?;
        }
        TokenAction::Revoke { name_or_id } => {
            revoke_token(repo, name_or_id).await?;
        }
    }

    Ok(())
}

/// Registers a user and prints its first token.
///
/// The raw token is shown once; only its HMAC hash is stored.
async fn create_user(
    users: &UserService<PgUserRepository>,
    auth: &AuthService<PgTokenRepository>,
    username: Option<String>,
    name: Option<String>,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let user = users
        .register(&username, name.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    let (_, raw) = auth
        .issue_token(user.id, &format!("{} default", user.username))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!("{}", "✅ User created successfully!".green().bold());
    println!();
    println!("  ID:       {}", user.id.to_string().bright_black());
    println!("  Username: {}", user.username.cyan());
    println!("  Name:     {}", user.display_name().cyan());
    println!();
    print_token_usage(&raw);

    Ok(())
}

/// Lists registered users.
async fn list_users(users: &UserService<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let list = users
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if list.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &list {
        println!(
            "  {:<5} {:<20} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.name.as_deref().unwrap_or("-"),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
        );
    }

    println!();
    println!("  Total: {}", list.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// # Flow
///
/// 1. Resolve the owning user
/// 2. Prompt for token name (or use provided)
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Store the HMAC hash of a generated or provided value
/// 5. Display usage instructions
async fn create_token(
    users: &UserService<PgUserRepository>,
    auth: &AuthService<PgTokenRepository>,
    username: String,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    let user = users
        .get_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e, username))?;

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Laptop")
            .interact_text()?,
    };

    println!("  User:  {}", user.username.cyan());
    println!("  Name:  {}", token_name.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let raw = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            auth.register_token(user.id, &token_name, &t)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;
            t
        }
        None => {
            let (_, generated) = auth
                .issue_token(user.id, &token_name)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;
            generated
        }
    };

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    print_token_usage(&raw);

    Ok(())
}

fn print_token_usage(raw: &str) {
    println!("  Token: {}", raw.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/blogs",
        raw.bright_yellow()
    );
    println!();
}

/// Lists all API tokens with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 API Tokens
///
///   ID  User  Name                           Created              Status
///   ───────────────────────────────────────────────────────────────────────
///   1   1     mluukkai default               2024-01-15 10:30     ACTIVE
///   2   1     Laptop                         2024-01-16 14:20     REVOKED
/// ```
async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "📋 API Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create --username <user>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<5} {:<30} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "User".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for token in &tokens {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<3} {:<5} {:<30} {:<20} {}",
            token.id.to_string().bright_black(),
            token.user_id.to_string().bright_black(),
            token.name.cyan(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt.
///
/// # Lookup
///
/// - If input is numeric, lookup by ID
/// - Otherwise, lookup by name (exact match)
async fn revoke_token(repo: Arc<PgTokenRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Token".bright_blue().bold());
    println!();

    let token: Option<ApiToken> = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .list_tokens()
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
            .into_iter()
            .find(|t| t.id == id),
        Err(_) => repo
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let token = token.context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays catalog statistics.
///
/// Shows the same figures as `GET /api/stats`.
async fn handle_stats(pool: Arc<PgPool>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = StatsService::new(Arc::new(PgBlogRepository::new(pool)));
    let stats = service
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute statistics: {}", e))?;

    let author = |a: &Option<String>| a.clone().unwrap_or_else(|| "(no author)".to_string());

    println!(
        "  Total likes:   {}",
        stats.total_likes.to_string().bright_green().bold()
    );

    match &stats.favorite_blog {
        Some(fav) => println!(
            "  Favorite blog: {} by {} ({} likes)",
            fav.title.cyan(),
            author(&fav.author),
            fav.likes.to_string().bright_green()
        ),
        None => println!("  Favorite blog: {}", "-".bright_black()),
    }

    match &stats.most_blogs {
        Some(top) => println!(
            "  Most blogs:    {} ({} blogs)",
            author(&top.author).cyan(),
            top.blogs.to_string().bright_green()
        ),
        None => println!("  Most blogs:    {}", "-".bright_black()),
    }

    match &stats.most_likes {
        Some(top) => println!(
            "  Most likes:    {} ({} likes)",
            author(&top.author).cyan(),
            top.likes.to_string().bright_green()
        ),
        None => println!("  Most likes:    {}", "-".bright_black()),
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let blogs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
                .fetch_one(pool)
                .await?;
            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Blogs:      {}", blogs.to_string().bright_white());
            println!("  Users:      {}", users.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

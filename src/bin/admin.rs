//! CLI administration tool for the capstone services.
//!
//! Talks to the database directly through the same repositories the HTTP
//! services use, so it works while the services are down.
//!
//! # Usage
//!
//! ```bash
//! # Create an approved account (prompts for missing values)
//! cargo run --bin admin -- account create --username alice --acc-type Admin
//!
//! # Approve or delete an account
//! cargo run --bin admin -- account approve 42
//! cargo run --bin admin -- account delete 42
//!
//! # List capstone records
//! cargo run --bin admin -- record list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use capstone_services::config::{load_database_url, mask_connection_string, validate_database_url};
use capstone_services::domain::entities::NewAccount;
use capstone_services::domain::entities::account::{DEFAULT_ACC_TYPE, STATUS_CREATED};
use capstone_services::domain::repositories::{AccountRepository, RecordRepository};
use capstone_services::infrastructure::persistence::{
    MySqlAccountRepository, MySqlRecordRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::MySqlPool;
use std::sync::Arc;

/// CLI tool for managing accounts and capstone records.
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
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Inspect capstone records
    Record {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Create an account that is already approved
    Create {
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Account type, e.g. "User" or "Admin"
        #[arg(short = 't', long)]
        acc_type: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Approve a pending account
    Approve { id: i64 },

    /// Delete an account
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum RecordAction {
    /// List all records
    List,
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

    let database_url = load_database_url().context("Failed to load database configuration")?;
    validate_database_url(&database_url)?;

    let pool = MySqlPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Account { action } => {
            let repo = MySqlAccountRepository::new(pool.clone());
            handle_account_action(action, &repo).await?
        }
        Commands::Record { action } => {
            let repo = MySqlRecordRepository::new(pool.clone());
            match action {
                RecordAction::List => list_records(&repo).await?,
            }
        }
        Commands::Db { action } => match action {
            DbAction::Check => {
                let repo = MySqlAccountRepository::new(pool.clone());
                check_database(&repo).await?
            }
        },
    }

    pool.close().await;
    Ok(())
}

/// Dispatches account management commands.
async fn handle_account_action(action: AccountAction, repo: &dyn AccountRepository) -> Result<()> {
    match action {
        AccountAction::Create {
            username,
            password,
            acc_type,
            yes,
        } => create_account(repo, username, password, acc_type, yes).await,
        AccountAction::Approve { id } => approve_account(repo, id).await,
        AccountAction::Delete { id, yes } => delete_account(repo, id, yes).await,
    }
}

/// Creates an account with status `Created`.
///
/// # Flow
///
/// 1. Prompt for any value not given as a flag
/// 2. Show the account details
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Insert the row
async fn create_account(
    repo: &dyn AccountRepository,
    username: Option<String>,
    password: Option<String>,
    acc_type: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    let acc_type = match acc_type {
        Some(t) => t,
        None => Input::new()
            .with_prompt("Account type")
            .default(DEFAULT_ACC_TYPE.to_string())
            .interact_text()?,
    };

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Username: {}", username.cyan());
    println!("  Type:     {}", acc_type.cyan());
    println!("  Status:   {}", STATUS_CREATED.green());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let id = repo
        .create(NewAccount {
            username,
            password,
            acc_type,
            acc_status: STATUS_CREATED.to_string(),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Account created with ID".green().bold(),
        id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn approve_account(repo: &dyn AccountRepository, id: i64) -> Result<()> {
    let affected = repo
        .approve(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to approve account: {}", e))?;

    if affected == 0 {
        println!(
            "{}",
            format!("⚠️  Account {id} not found or already approved").yellow()
        );
    } else {
        println!("{}", "✅ Account approved successfully!".green().bold());
    }

    Ok(())
}

/// Deletes an account after confirmation (default: No).
async fn delete_account(repo: &dyn AccountRepository, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Account".bright_blue().bold());
    println!();
    println!("  ID: {}", id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this account?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let affected = repo
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete account: {}", e))?;

    if affected == 0 {
        println!("{}", format!("⚠️  No account with ID {id}").yellow());
    } else {
        println!("{}", "✅ Account deleted successfully!".green().bold());
    }
    println!();

    Ok(())
}

/// Lists all capstone records.
///
/// # Output Format
///
/// ```text
/// 📋 Capstone Records
///
///   ID   Year       Title                          Company
///   ───────────────────────────────────────────────────────────────────────────
///   1    2022/2023  Smart Campus                   ACME Pte Ltd
/// ```
async fn list_records(repo: &dyn RecordRepository) -> Result<()> {
    println!("{}", "📋 Capstone Records".bright_blue().bold());
    println!();

    let records = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list records: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No records found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<width$} {:<30} {:<30}",
        "ID".bright_white().bold(),
        "Year".bright_white().bold(),
        "Title".bright_white().bold(),
        "Company".bright_white().bold(),
        width = YEAR_WIDTH
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<4} {} {:<30} {}",
            record.id.to_string().bright_black(),
            year_cell(&record.fields.acad_yr),
            truncate(&record.fields.capstone_title, 30).cyan(),
            record.fields.company_name
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

async fn check_database(repo: &dyn AccountRepository) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    repo.ping()
        .await
        .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

    println!("{}", "✅ Database connection OK".green().bold());
    Ok(())
}

/// Width of the year column; fits academic years such as `2022/2023`.
const YEAR_WIDTH: usize = 10;

fn year_cell(acad_yr: &str) -> String {
    format!("{:<width$}", truncate(acad_yr, YEAR_WIDTH), width = YEAR_WIDTH)
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let mut truncated: String = value.chars().take(max_chars - 1).collect();
        truncated.push('…');
        truncated
    }
}

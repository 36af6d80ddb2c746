//! CLI administration tool for kv-shortener.
//!
//! Talks to the same key-value store as the server, using the same
//! environment configuration.
//!
//! # Usage
//!
//! ```bash
//! # Show the global visit counter
//! cargo run --bin admin -- counter show
//!
//! # Reset the counter (asks for confirmation unless -y)
//! cargo run --bin admin -- counter reset
//!
//! # Look up a short code
//! cargo run --bin admin -- lookup 4fg
//!
//! # Create a short URL without going through HTTP
//! cargo run --bin admin -- shorten https://example.com --short promo --expiry 24
//!
//! # Check both logical databases
//! cargo run --bin admin -- store check
//! ```

use kv_shortener::config::{self, Config, StoreBackend, mask_connection_string};
use kv_shortener::state::AppState;
use kv_shortener::application::services::ShortenCommand;
use kv_shortener::infrastructure::store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing kv-shortener.
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
    /// Inspect or reset the visit counter
    Counter {
        #[command(subcommand)]
        action: CounterAction,
    },

    /// Print the original URL behind a short code
    Lookup {
        /// Short code to resolve
        code: String,
    },

    /// Create a short URL
    Shorten {
        /// URL to shorten
        url: String,

        /// Custom short code
        #[arg(short, long)]
        short: Option<String>,

        /// Expiry in hours
        #[arg(short, long)]
        expiry: Option<u64>,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

#[derive(Subcommand)]
enum CounterAction {
    /// Show the current value
    Show,

    /// Reset to zero
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Ping the mapping and counter databases
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    if config.store_backend == StoreBackend::Memory {
        println!(
            "{}",
            "⚠️  STORE_BACKEND=memory: commands run against an empty, throwaway store".yellow()
        );
    }

    let store = store::connect(&config).await?;
    let state = AppState::new(config, store);

    match cli.command {
        Commands::Counter { action } => handle_counter_action(action, &state).await?,
        Commands::Lookup { code } => lookup(&state, &code).await?,
        Commands::Shorten { url, short, expiry } => {
            shorten(&state, url, short, expiry).await?
        }
        Commands::Store { action } => handle_store_action(action, &state).await,
    }

    Ok(())
}

/// Dispatches counter commands.
async fn handle_counter_action(action: CounterAction, state: &AppState) -> Result<()> {
    let key = state.config.counter_key.as_str();

    match action {
        CounterAction::Show => {
            let visits = state.counter.current(key).await?;
            println!(
                "  {}: {}",
                key.cyan(),
                visits.to_string().bright_green().bold()
            );
        }
        CounterAction::Reset { yes } => {
            let visits = state.counter.current(key).await?;
            println!("  {}: {}", key.cyan(), visits.to_string().bright_white());

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Reset this counter to 0?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            state.counter.reset(key).await?;
            println!("{}", "✅ Counter reset".green().bold());
        }
    }

    Ok(())
}

async fn lookup(state: &AppState, code: &str) -> Result<()> {
    let url = state.resolver.resolve(code).await?;
    println!("  {} → {}", code.cyan(), url.bright_white());
    Ok(())
}

async fn shorten(
    state: &AppState,
    url: String,
    custom_code: Option<String>,
    expiry_hours: Option<u64>,
) -> Result<()> {
    let mapping = state
        .shortener
        .shorten(ShortenCommand {
            url,
            custom_code,
            expiry_hours,
        })
        .await?;

    println!("{}", "✅ Short URL created".green().bold());
    println!("  URL:   {}", mapping.original_url.bright_white());
    println!(
        "  Short: {}",
        state.shortener.short_url(&mapping.code).bright_yellow().bold()
    );
    if let Some(hours) = mapping.expiry_hours() {
        println!("  Expires in: {}h", hours);
    }

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_store_action(action: StoreAction, state: &AppState) {
    match action {
        StoreAction::Check => {
            print_target(&state.config);

            let health = state.store.ping().await;
            print_check("Mapping store", health.mapping);
            print_check("Counter store", health.counter);
        }
    }
}

fn print_target(config: &Config) {
    if config.store_backend == StoreBackend::Redis {
        println!(
            "{} {}",
            "🔍 Checking".bright_blue(),
            mask_connection_string(&config.redis_url).bright_white()
        );
    }
}

fn print_check(name: &str, ok: bool) {
    if ok {
        println!("  {} {}", "✅".green(), name);
    } else {
        println!("  {} {}", "❌".red(), name.red().bold());
    }
}

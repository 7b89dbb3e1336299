use clap::{Parser, Subcommand};
use livematch::client::Client;
use livematch::commands::{self, event::EventArgs, lifecycle::FinishArgs, CommandContext};
use livematch::config;
use livematch::data_provider::MatchAuthority;
use livematch::dev::mock_client::MockAuthority;
use livematch::live::clock::WallClock;
use livematch::types::{EventId, MatchId, PlayerId};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "livematch")]
#[command(about = "Live match tracking for university sports", long_about = None)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Match authority base URL (overrides api_base_url from the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Use an in-memory authority seeded with demo data instead of the server
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the scoreboard and timeline of a match
    Show {
        match_id: MatchId,
    },
    /// Start a scheduled match
    Start {
        match_id: MatchId,
    },
    /// Record an event
    Event {
        match_id: MatchId,

        /// Team: home, away or a team id
        #[arg(short, long)]
        team: String,

        /// Player id from the team's roster
        #[arg(short, long)]
        player: PlayerId,

        /// GOAL, PENALTY, OWN_GOAL, YELLOW_CARD, RED_CARD or SUBSTITUTION
        #[arg(short = 'k', long = "type")]
        event_type: String,

        /// Minute of the event (defaults to the match clock)
        #[arg(short, long)]
        minute: Option<u32>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a recorded event
    DeleteEvent {
        match_id: MatchId,
        event_id: EventId,
    },
    /// Register the result and finish a match in progress
    Finish {
        match_id: MatchId,

        /// Home score (defaults to the recorded score)
        #[arg(long)]
        home: Option<u32>,

        /// Away score (defaults to the recorded score)
        #[arg(long)]
        away: Option<u32>,

        /// Winner: home, away, a team id, or none (defaults to the side with more goals)
        #[arg(long)]
        winner: Option<String>,

        /// Notes attached to the result
        #[arg(long)]
        notes: Option<String>,
    },
    /// Cancel a scheduled match
    Cancel {
        match_id: MatchId,
    },
    /// Follow a match live with the running clock
    Watch {
        match_id: MatchId,
    },
    /// Display current configuration
    Config,
}

fn create_authority(cli: &Cli, cfg: &config::Config) -> Arc<dyn MatchAuthority> {
    if cli.mock {
        return Arc::new(MockAuthority::with_fixtures_and_clock(Arc::new(WallClock)));
    }

    let base_url = cli.api_url.as_deref().unwrap_or(&cfg.api_base_url);
    match Client::new(base_url, cfg.request_timeout()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create match API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_base_url: {}", cfg.api_base_url);
    println!("request_timeout_secs: {}", cfg.request_timeout_secs);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("clock_tick_ms: {}", cfg.clock_tick_ms);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(ctx: &CommandContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Show { match_id } => commands::show::run(ctx, match_id).await,
        Commands::Start { match_id } => commands::lifecycle::start(ctx, match_id).await,
        Commands::Event {
            match_id,
            team,
            player,
            event_type,
            minute,
            description,
        } => {
            let args = EventArgs {
                team,
                player,
                event_type,
                minute,
                description,
            };
            commands::event::add(ctx, match_id, args).await
        }
        Commands::DeleteEvent { match_id, event_id } => {
            commands::event::delete(ctx, match_id, event_id).await
        }
        Commands::Finish {
            match_id,
            home,
            away,
            winner,
            notes,
        } => {
            let args = FinishArgs {
                home_score: home,
                away_score: away,
                winner,
                notes,
            };
            commands::lifecycle::finish(ctx, match_id, args).await
        }
        Commands::Cancel { match_id } => commands::lifecycle::cancel(ctx, match_id).await,
        Commands::Watch { match_id } => commands::watch::run(ctx, match_id).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need an authority)
    if let Commands::Config = cli.command {
        handle_config_command();
        return;
    }

    let authority = create_authority(&cli, &config);
    let ctx = CommandContext::new(authority, Arc::new(WallClock), config);
    if let Err(e) = execute_command(&ctx, cli.command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}

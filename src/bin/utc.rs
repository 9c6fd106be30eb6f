//! UTC CLI binary.
//!
//! Universal Token Counter.
//!
//! # Commands
//!
//! - `count` - Count tokens for a model
//! - `models` - List supported models
//! - `serve` - Start the HTTP API server

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use utc::{
    config::Config,
    models::{supported_models, Encoding},
    server::{serve, AppState, ServerConfig},
    TiktokenEncoder, TokenCounter, VERSION,
};

#[derive(Parser)]
#[command(name = "utc")]
#[command(version = VERSION)]
#[command(about = "Universal Token Counter - token counts and text statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count tokens in text for a model
    Count {
        /// Model name (e.g. gpt-4o)
        model: String,

        /// Text to count (or - for stdin)
        text: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pretty-print the JSON response
        #[arg(long)]
        pretty: bool,

        /// Config file (for size limits)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List supported models
    Models {
        /// Only show models using this encoding (e.g. o200k_base)
        #[arg(short, long)]
        encoding: Option<String>,
    },

    /// Start the HTTP API server
    Serve {
        /// Listen port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind to all interfaces
        #[arg(long)]
        bind_all: bool,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,

        /// Emit JSON log lines
        #[arg(long)]
        json_logs: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count {
            model,
            text,
            file,
            pretty,
            config,
        } => cmd_count(&model, text, file, pretty, config),

        Commands::Models { encoding } => cmd_models(encoding.as_deref()),

        Commands::Serve {
            port,
            host,
            bind_all,
            config,
            verbose,
            json_logs,
        } => cmd_serve(port, host, bind_all, config, verbose, json_logs),
    }
}

fn init_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn cmd_count(
    model: &str,
    text: Option<String>,
    file: Option<PathBuf>,
    pretty: bool,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    init_logging("warn", false);

    let config = Config::load(config)?;
    let content = read_input(text, file)?;
    let counter = TokenCounter::new().with_limits(config.limits.into());

    match counter.count(model, &content) {
        Ok(response) => {
            let out = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{out}");
            Ok(())
        },
        Err(e) => match e.code() {
            Some(code) => {
                eprintln!("{code}: {}", e.detail());
                std::process::exit(2);
            },
            None => Err(e.into()),
        },
    }
}

fn cmd_models(encoding: Option<&str>) -> anyhow::Result<()> {
    let filter = encoding.map(str::parse::<Encoding>).transpose()?;
    let models: Vec<_> = supported_models()
        .into_iter()
        .filter(|m| filter.map_or(true, |e| m.encoding == e))
        .collect();

    println!("Supported Models ({}):", models.len());
    println!();
    println!("{:<28} {:<14} {:<8}", "Model", "Encoding", "Family");
    println!("{}", "-".repeat(52));

    for info in &models {
        println!(
            "{:<28} {:<14} {:<8}",
            info.model,
            info.encoding.name(),
            info.family.as_str()
        );
    }

    Ok(())
}

fn cmd_serve(
    port: Option<u16>,
    host: Option<String>,
    bind_all: bool,
    config_path: Option<PathBuf>,
    verbose: bool,
    json_logs: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(host) = host {
        config.server.host = host;
    }

    // Initialize logging
    let log_level = if verbose { "debug" } else { config.logging.level.as_str() };
    init_logging(log_level, json_logs || config.logging.json);

    let mut server_config = ServerConfig::from_config(&config)?;
    if bind_all {
        server_config = server_config.bind_all();
    }

    if let Err(e) = TiktokenEncoder::new().preload() {
        tracing::error!("Tokenizer preload failed, requests will return 500: {}", e);
    }

    tracing::info!("Starting UTC server on {}", server_config.addr);
    tracing::info!(
        "Limits: {} chars, {} bytes",
        server_config.limits.max_chars,
        server_config.limits.max_bytes
    );
    tracing::info!(
        "CORS: {}",
        if server_config.cors_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    let state = Arc::new(AppState::new(server_config));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(state))?;
    Ok(())
}

fn read_input(input: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        Ok(std::fs::read_to_string(path)?)
    } else if let Some(s) = input.filter(|s| s != "-") {
        Ok(s)
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

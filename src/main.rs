use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

use krishi::core::config::{self, CliOverrides, KrishiConfig};

#[derive(Parser)]
#[command(name = "krishi", about = "Kerala farming assistant for the terminal")]
struct Args {
    /// Simulated assistant reply delay in milliseconds
    #[arg(long)]
    reply_delay_ms: Option<u64>,

    /// Simulated sign-in delay in milliseconds
    #[arg(long)]
    login_delay_ms: Option<u64>,

    /// Seed for the canned reply picker (deterministic replies)
    #[arg(long)]
    seed: Option<u64>,

    /// Config file to use instead of ~/.krishi/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Load before the logger exists: the log level itself may come from the file
    let loaded = config::load_config(args.config.as_deref());
    let cli = CliOverrides {
        login_delay_ms: args.login_delay_ms,
        reply_delay_ms: args.reply_delay_ms,
        reply_seed: args.seed,
    };
    let resolved = match &loaded {
        Ok(loaded) => config::resolve(&loaded.config, &cli),
        Err(_) => config::resolve(&KrishiConfig::default(), &cli),
    };

    // Initialize file logger - writes to krishi.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("krishi.log") {
        let _ = WriteLogger::init(config::level_filter(&resolved.log_level), log_config, log_file);
    }

    log::info!("Krishi starting up");
    match &loaded {
        Ok(loaded) => {
            loaded.source.log();
            log::debug!("Config: {:?}", loaded.config);
        }
        Err(e) => log::warn!("Ignoring config file: {}; using defaults", e),
    }
    for ignored in &resolved.ignored_env {
        log::warn!("Ignoring {}", ignored);
    }
    log::info!(
        "Delays: login {}ms, reply {}ms; reply seed {:?}",
        resolved.login_delay.as_millis(),
        resolved.reply_delay.as_millis(),
        resolved.reply_seed
    );

    krishi::tui::run(resolved)
}

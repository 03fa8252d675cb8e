use std::fs::File;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use prato::core::config;
use prato::tui;

#[derive(Parser)]
#[command(name = "prato", about = "Food details and ordering in the terminal")]
struct Args {
    /// Menu item to open
    #[arg(short, long)]
    food_id: Option<u64>,

    /// Backend base URL
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to prato.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("prato.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Falling back to default config: {e}");
            config::PratoConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.food_id);

    log::info!(
        "Prato starting up: food id {}, backend {}",
        resolved.food_id,
        resolved.base_url
    );

    tui::run(resolved)
}

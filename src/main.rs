use clap::Parser;
use sahaayak::Language;
use sahaayak::core::config::{self, CliOverrides, SahaayakConfig};
use sahaayak::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "sahaayak", about = "Multilingual scholarship guide chat")]
struct Args {
    /// Interface and reply language
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Seed the reply picker for a reproducible conversation
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to sahaayak.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("sahaayak.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        SahaayakConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            language: args.language,
            seed: args.seed,
        },
    );

    log::info!(
        "Sahaayak starting up (language: {}, reply delay: {:?}, voice: {:?})",
        resolved.language.code(),
        resolved.reply_delay,
        resolved.voice_device
    );

    tui::run(resolved)
}

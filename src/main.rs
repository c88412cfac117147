// craps-icons - main.rs
//
// Binary entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (CLI > config.toml > defaults)
// 3. Logging initialisation (debug mode support)
// 4. The generation run, with progress printed to stdout

use clap::Parser;
use craps_icons::app::generate;
use craps_icons::platform::config::{self, AppConfig, PlatformPaths};
use craps_icons::util;
use std::path::PathBuf;

/// craps-icons - Casey Craps app icon generator.
///
/// Draws the dice icon at every size a macOS AppIcon.appiconset needs and
/// rewrites its Contents.json.
#[derive(Parser, Debug)]
#[command(name = "craps-icons", version, about)]
struct Cli {
    /// Icon set directory (defaults to the app's AppIcon.appiconset).
    output_dir: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Create the output directory if it does not exist.
    #[arg(long = "create-dir")]
    create_dir: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Merge CLI overrides into the loaded config.
fn apply_cli(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(ref dir) = cli.output_dir {
        config.output_dir = dir.clone();
    }
    if cli.create_dir {
        config.create_dir = true;
    }
    config
}

fn main() {
    let cli = Cli::parse();

    let loaded = match cli.config {
        Some(ref path) => config::load_config(path, true),
        None => config::load_config(&PlatformPaths::resolve().config_file(), false),
    };
    let (app_config, warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            util::logging::init(cli.debug, None);
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let app_config = apply_cli(app_config, &cli);
    tracing::info!(
        version = util::constants::APP_VERSION,
        output = %app_config.output_dir.display(),
        "craps-icons starting"
    );

    if let Err(e) = generate::generate(&app_config, |progress| println!("{progress}")) {
        tracing::error!(error = %e, "Icon generation failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

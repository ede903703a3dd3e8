use anyhow::Context;
use clap::Parser;
use image_curator_core::{Config, ImageCurator, LogLevel};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-curator")]
#[command(about = "Validate, deduplicate and label a directory of images")]
#[command(version)]
struct Cli {
    /// The input directory where images are located
    #[arg(required_unless_present = "generate_config")]
    input_dir: Option<PathBuf>,

    /// The output directory for valid images [default: ./validated_pictures]
    #[arg(long = "output_dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// The log file path for recording invalid files [default: ./validation_log.txt]
    #[arg(long = "log_file", value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Zero-padding width of output file names [default: 7]
    #[arg(long = "name_width", value_name = "N")]
    name_width: Option<usize>,

    /// Show a progress bar
    #[arg(long)]
    progress: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to FILE and exit
    #[arg(long = "generate_config", value_name = "FILE")]
    generate_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Set up configuration
    let mut config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };

    // Override config with command line arguments
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }
    if let Some(name_width) = cli.name_width {
        config.name_width = name_width;
    }
    config.show_progress |= cli.progress;

    // Set log level based on verbosity
    config.log_level = match cli.verbose {
        0 => config.log_level,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };

    // Initialize logger; RUST_LOG still wins when set
    let default_filter = config.log_level.to_level_filter().to_string();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Validate configuration
    config.validate()?;

    if let Some(path) = &cli.generate_config {
        config.save_to_file(path)?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let input_dir = cli.input_dir.context("An input directory is required")?;
    let curator = ImageCurator::new(config);

    info!("Starting image validation...");
    let summary = curator
        .run(&input_dir)
        .with_context(|| format!("Failed to process {}", input_dir.display()))?;
    info!("Validation complete");

    println!("Number of valid files copied: {}", summary.accepted);

    Ok(())
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quote_overlay::config::Config;
use quote_overlay::constants::DEFAULT_JPEG_QUALITY;
use quote_overlay::fonts::{FontProvider, FontRegistry};
use quote_overlay::overlay::{OverlayCompositor, OverlayRequest};

/// Configuration file used when `--config` is not given
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Quote overlay service - composites quotes onto images
#[derive(Parser, Debug)]
#[command(name = "quote-overlay")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Composite a quote onto a local image file
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Source image
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the JPEG result
    #[arg(short, long)]
    output: PathBuf,

    /// Quote text
    #[arg(short, long, default_value = "")]
    quote: String,

    /// Attribution text
    #[arg(short, long, default_value = "")]
    attribution: String,

    /// Font name from the discovered font directories
    #[arg(short, long)]
    font: Option<String>,

    /// Draw only the translucent box, without text
    #[arg(long)]
    box_only: bool,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    quality: u8,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Config::from_file(DEFAULT_CONFIG_FILE)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Failed to load configuration from {}", DEFAULT_CONFIG_FILE))?,
        None => Config::default(),
    };

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;
    Ok(config)
}

fn init_logging(config: &Config) -> Result<()> {
    quote_overlay::logging::init_subscriber(config.logging.format)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging subsystem")
}

fn serve(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    init_logging(&config)?;

    tracing::info!(
        config_file = %config_path.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG_FILE)).display(),
        server_address = %config.server.address,
        server_port = config.server.port,
        font_directories = config.fonts.directories.len(),
        "Configuration loaded successfully"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime
        .block_on(quote_overlay::server::run(config))
        .context("Server terminated with an error")
}

fn render(args: RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    init_logging(&config)?;

    let registry = Arc::new(FontRegistry::discover(&config.fonts));
    let provider = Arc::new(FontProvider::from_config(registry, &config.fonts));
    let compositor = OverlayCompositor::new(provider).with_jpeg_quality(args.quality);

    let data = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let encoded = if args.box_only {
        compositor.box_bytes(&data)?
    } else {
        let mut request = OverlayRequest::new(args.quote, args.attribution);
        if let Some(font) = args.font {
            request = request.with_font(font);
        }
        compositor.validate_font(request.font.as_deref())?;
        compositor.overlay_bytes(&data, &request)?
    };

    std::fs::write(&args.output, &encoded.data)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(
        output = %args.output.display(),
        width = encoded.size.0,
        height = encoded.size.1,
        bytes = encoded.data.len(),
        "Wrote overlay image"
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config } => serve(config),
        Command::Render(args) => render(args),
    }
}

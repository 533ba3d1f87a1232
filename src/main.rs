use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chroma_core::PaletteType;
use chromatic_curator::api;
use chromatic_curator::models::AppConfig;
use chromatic_curator::server;
use chromatic_curator::services::{Preview, PreviewService};

#[derive(Parser)]
#[command(name = "curator")]
#[command(about = "Chromatic Curator - color previews and harmonic palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render a color preview to a PNG file
    Color {
        /// Color token: decimal value, catalog name, #RRGGBB, #RGB or "random"
        token: String,

        /// Number of similar colors to include
        #[arg(short, long, default_value_t = 0)]
        range: usize,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Render a palette preview to a PNG file
    Palette {
        /// Palette type, e.g. "triadic" or "split-complementary"
        kind: String,

        /// Base color token
        token: String,

        /// Number of palette layers (five colors each)
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chromatic Curator API",
        description = "Color previews, similar-color lookup and harmonic palettes",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_color,
        api::handle_palette,
        api::handle_palette_types,
        api::handle_share,
    ),
    components(schemas(
        api::ColorInfo,
        api::SwatchInfo,
        api::ColorPreviewResponse,
        api::PaletteTypeInfo,
        api::PaletteResponse,
    )),
    tags(
        (name = "Preview", description = "Color previews and sharing"),
        (name = "Palette", description = "Harmonic palette generation")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Color {
            token,
            range,
            output,
        }) => run_color_command(&token, range, &output),
        Some(Commands::Palette {
            kind,
            token,
            count,
            output,
        }) => run_palette_command(&kind, &token, count, &output),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromatic_curator=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn config_path() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// Build a preview service from `CONFIG_FILE` (no server needed)
fn cli_preview_service() -> anyhow::Result<PreviewService> {
    let config = AppConfig::load(config_path().as_deref());
    let catalog = Arc::new(config.load_catalog()?);
    Ok(PreviewService::new(catalog, config.limits))
}

fn write_preview(preview: &Preview, output: &Path) -> anyhow::Result<()> {
    std::fs::write(output, &preview.png)?;
    println!(
        "Rendered {} ({} bytes) for {} {}",
        output.display(),
        preview.png.len(),
        preview.main.name,
        preview.main.color
    );
    for (i, swatch) in preview.swatches.iter().enumerate() {
        let marker = if swatch.is_exact() { "" } else { " ~" };
        println!("  {:>2}. {:<22} {}{marker}", i + 1, swatch.name, swatch.color);
    }
    Ok(())
}

/// Render a color preview directly to a PNG file
fn run_color_command(token: &str, range: usize, output: &Path) -> anyhow::Result<()> {
    init_cli_tracing();

    let service = cli_preview_service()?;
    let preview = service
        .preview_color(token, range)
        .map_err(|e| anyhow::anyhow!("Preview error: {e}"))?;

    write_preview(&preview, output)
}

/// Render a palette preview directly to a PNG file
fn run_palette_command(kind: &str, token: &str, count: usize, output: &Path) -> anyhow::Result<()> {
    init_cli_tracing();

    let service = cli_preview_service()?;
    let preview = service
        .preview_palette(kind, token, count)
        .map_err(|e| anyhow::anyhow!("Palette error: {e}"))?;

    write_preview(&preview, output)
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Chromatic Curator v{VERSION}");
    println!("Color previews and harmonic palettes\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    let config = match config_file {
        Some(ref path) if Path::new(path).exists() => {
            println!("  Config:  {path}");
            AppConfig::load(Some(Path::new(path)))
        }
        Some(_) => {
            println!("  Config:  defaults (file not found)");
            AppConfig::default()
        }
        None => {
            println!("  Config:  defaults");
            AppConfig::default()
        }
    };

    match &config.catalog_file {
        Some(path) => match config.load_catalog() {
            Ok(catalog) => println!("  Catalog: {} ({} colors)", path.display(), catalog.len()),
            Err(e) => println!("  Catalog: {} (error: {e})", path.display()),
        },
        None => println!(
            "  Catalog: built-in ({} colors)",
            chroma_core::Catalog::builtin().len()
        ),
    }
    println!("  Share TTL: {}s", config.share_ttl_secs);

    println!("\nPalette Types:");
    for kind in PaletteType::ALL {
        println!("  {:<22} {}", kind.id(), kind.display_name());
    }

    println!("\nCommands:");
    println!("  curator serve     Start the HTTP server");
    println!("  curator color     Render a color preview to PNG file");
    println!("  curator palette   Render a palette preview to PNG file");
    println!("\nRun 'curator --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromatic_curator=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::load(config_path().as_deref());

    let state = server::create_app_state(config)?;
    tracing::info!(
        colors = state.preview.catalog().len(),
        share_ttl_secs = state.config.share_ttl_secs,
        max_similar = state.config.limits.max_similar,
        max_palette_layers = state.config.limits.max_palette_layers,
        "Application state ready"
    );

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Chromatic Curator listening");

    axum::serve(listener, app).await?;

    Ok(())
}

mod assist;
mod backend;
mod capture;
mod config;
mod editor;
mod errors;
mod export;
mod layout;
mod models;
mod render;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod testing;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::BackendClient;
use crate::capture::Rasterizer;
use crate::config::Config;
use crate::export::ExportArtifact;
use crate::models::TemplateId;
use crate::render::RenderOptions;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;
use crate::store::{DocumentStore, FileStore, MemoryStore};

#[derive(Parser, Debug)]
#[command(name = "vitae", version, about = "Résumé builder service")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (the default).
    Serve(ServeArgs),
    /// Export the stored résumé to a file.
    Export(ExportArgs),
}

#[derive(Parser, Debug, Default)]
struct ServeArgs {
    /// Keep the document in memory only; nothing is written to DATA_DIR.
    #[arg(long)]
    ephemeral: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[arg(long, value_enum, default_value_t = Format::Pdf)]
    format: Format,

    /// Template id; the stored selection when omitted.
    #[arg(long)]
    template: Option<String>,

    /// Logo image (path or data URI) painted in the top-right corner.
    #[arg(long)]
    logo: Option<String>,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Pdf,
    Text,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.cmd.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(config, args).await,
        Command::Export(args) => run_export(config, args).await,
    }
}

async fn serve(config: Config, args: ServeArgs) -> Result<()> {
    info!("Starting Vitae v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn DocumentStore> = if args.ephemeral {
        info!("Ephemeral session: document kept in memory");
        Arc::new(MemoryStore::new())
    } else {
        let store = FileStore::open(&config.data_dir)
            .with_context(|| format!("open data dir '{}'", config.data_dir.display()))?;
        info!("Document store at {}", store.path().display());
        Arc::new(store)
    };

    let backend = BackendClient::new(config.backend_url.clone());
    info!("Backend client initialized ({})", backend.base_url());

    let rasterizer = Rasterizer::new(config.fonts_dir.as_deref(), config.resources_dir.clone());

    let state = AppState {
        store,
        backend: Arc::new(backend),
        rasterizer,
        config: config.clone(),
    };

    let cors = cors_layer(&config);
    info!(origins = ?config.allowed_origins, "CORS origins");
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST and PORT must form a socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_export(config: Config, args: ExportArgs) -> Result<()> {
    let store = FileStore::open(&config.data_dir)
        .with_context(|| format!("open data dir '{}'", config.data_dir.display()))?;
    let doc = store.load();

    let artifact = match args.format {
        Format::Pdf => {
            let template = args
                .template
                .as_deref()
                .map(TemplateId::resolve)
                .unwrap_or(doc.selected_template);
            let mut options = RenderOptions::export();
            if let Some(logo) = args.logo {
                options = options.with_logo(logo);
            }
            let rasterizer =
                Rasterizer::new(config.fonts_dir.as_deref(), config.resources_dir.clone());
            export::export_pdf(&doc, template, &options, &rasterizer)
                .await
                .context(errors::PDF_EXPORT_FAILED)?
        }
        Format::Text => export::export_plain_text(&doc),
    };

    let path = write_artifact(&args.out, &artifact).with_context(|| match args.format {
        Format::Pdf => errors::PDF_EXPORT_FAILED,
        Format::Text => errors::TEXT_EXPORT_FAILED,
    })?;
    info!("Wrote {}", path.display());
    println!("{}", path.display());
    Ok(())
}

fn write_artifact(dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("create '{}'", dir.display()))?;
    let path = dir.join(&artifact.file_name);
    std::fs::write(&path, &artifact.bytes).with_context(|| format!("write '{}'", path.display()))?;
    Ok(path)
}

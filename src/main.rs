use anyhow::Result;
use clap::Parser;
use debriefd::{
    config::ServerConfig,
    rest,
    store::{MemoryStore, RecordStore},
    AppContext,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "debriefd",
    about = "Interview-analysis dashboard backend",
    version
)]
struct Args {
    /// HTTP server port
    #[arg(long, env = "DEBRIEFD_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "DEBRIEFD_BIND")]
    bind_address: Option<String>,

    /// Directory served under /images
    #[arg(long, env = "DEBRIEFD_IMAGES_DIR")]
    images_dir: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DEBRIEFD_LOG")]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "DEBRIEFD_LOG_FILE")]
    log_file: Option<std::path::PathBuf>,

    /// Path to the TOML config file (default: ./debriefd.toml)
    #[arg(long, env = "DEBRIEFD_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Start with an empty store instead of the demo dataset
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ServerConfig::new(
        args.port,
        args.bind_address,
        args.images_dir,
        args.log,
        args.config,
        args.no_seed,
    );

    // ── Logging setup ────────────────────────────────────────────────────────
    // Init once, before any tracing calls.
    let _file_guard = setup_logging(&config.log, args.log_file.as_deref(), &config.log_format);

    info!(version = env!("CARGO_PKG_VERSION"), "debriefd starting");
    info!(
        port = config.port,
        bind = %config.bind_address,
        images_dir = %config.images_dir.display(),
        seed = config.seed_demo_data,
        "config loaded"
    );

    if !config.images_dir.is_dir() {
        warn!(
            path = %config.images_dir.display(),
            "images directory does not exist; /images requests will 404"
        );
    }

    let store: Arc<dyn RecordStore> = if config.seed_demo_data {
        info!("store seeded with demo interview dataset");
        Arc::new(MemoryStore::seeded())
    } else {
        info!("store starting empty");
        Arc::new(MemoryStore::new())
    };

    let ctx = Arc::new(AppContext::new(config, store));
    rest::serve(ctx).await
}

/// Initialize the tracing subscriber.
/// If `log_file` is set, logs go to both stdout and a daily-rolling file.
/// Returns a `WorkerGuard` that must stay alive for the process lifetime.
///
/// `log_format` may be `"pretty"` (default, human-readable compact format) or
/// `"json"` (structured JSON for log aggregators).
///
/// If the log directory cannot be created, falls back to stdout-only logging
/// with a warning; never panics.
fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    if let Some(path) = log_file {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let filename = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("debriefd.log"));

        // Ensure the directory exists before tracing-appender tries to open it.
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!(
                "warn: could not create log directory '{}': {e}; falling back to stdout",
                dir.display()
            );
            if use_json {
                tracing_subscriber::fmt().json().with_env_filter(log_level).init();
            } else {
                tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
            }
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        if use_json {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(non_blocking))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().compact())
                .with(fmt::layer().with_writer(non_blocking))
                .init();
        }

        Some(guard)
    } else if use_json {
        tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        None
    } else {
        tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        None
    }
}

use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_IMAGES_DIR: &str = "./images";
const DEFAULT_CONFIG_PATH: &str = "./debriefd.toml";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ─── TOML config file ─────────────────────────────────────────────────────────

/// `debriefd.toml`; all fields are optional overrides.
/// Priority: CLI / env var  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// HTTP server port (default: 3000).
    port: Option<u16>,
    /// Bind address (default: "127.0.0.1"; use "0.0.0.0" for LAN access).
    bind_address: Option<String>,
    /// Directory served under `/images` (default: "./images").
    images_dir: Option<PathBuf>,
    /// Log level filter string, e.g. "debug", "info,debriefd=trace" (default: "info").
    log: Option<String>,
    /// Log output format: "pretty" (default, human-readable) | "json".
    log_format: Option<String>,
    /// Preload the demo interview dataset on startup (default: true).
    seed: Option<bool>,
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            // Config loads before the tracing subscriber is installed, so
            // a bad file is reported on stderr. Never fatal.
            eprintln!(
                "warn: failed to parse '{}': {e}; using defaults",
                path.display()
            );
            None
        }
    }
}

// ─── ServerConfig ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Bind address for the HTTP server (DEBRIEFD_BIND env var).
    pub bind_address: String,
    /// Directory served under `/images` (DEBRIEFD_IMAGES_DIR env var).
    pub images_dir: PathBuf,
    pub log: String,
    /// "pretty" (default) | "json" (structured for log aggregators).
    pub log_format: String,
    /// Whether the store starts with the demo dataset or empty.
    pub seed_demo_data: bool,
}

impl ServerConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env, passed as `Some(value)` from clap
    ///   2. TOML file at `--config` / `DEBRIEFD_CONFIG` / `./debriefd.toml`
    ///   3. Built-in defaults
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        images_dir: Option<PathBuf>,
        log: Option<String>,
        config_path: Option<PathBuf>,
        no_seed: bool,
    ) -> Self {
        let config_path =
            config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        // Load TOML as the lowest-priority override layer
        let toml = load_toml(&config_path).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);

        let bind_address = bind_address
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let images_dir = images_dir
            .or(toml.images_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR));

        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let log_format = std::env::var("DEBRIEFD_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let seed_demo_data = if no_seed {
            false
        } else {
            toml.seed.unwrap_or(true)
        };

        Self {
            port,
            bind_address,
            images_dir,
            log,
            log_format,
            seed_demo_data,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: default_bind_address(),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            log: "info".to_string(),
            log_format: "pretty".to_string(),
            seed_demo_data: true,
        }
    }
}

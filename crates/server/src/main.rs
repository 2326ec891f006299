use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use gathering_rules::{JsonLoader, Repository, RuleLoader, Service, Storage, YamlLoader};
use gathering_server::api::{self, AppState};
use gathering_server::config::{GatheringConfig, LogFormat};
use gathering_server::error::ServerError;

/// Environment variable holding an alternative config file path.
///
/// Consulted when `--config` is not passed; containerized deployments
/// mount the config file and point this variable at it. An explicit
/// flag always wins over the environment.
const CONFIG_FILE_ENV: &str = "GATHERING_SERVICE_CONFIG_FILE";

/// Config file used when neither the flag nor the env var is set.
const DEFAULT_CONFIG_FILE: &str = "gathering.toml";

/// Gathering rules HTTP server.
#[derive(Parser, Debug)]
#[command(
    name = "gathering-server",
    about = "Read-only HTTP server for conditional gathering rules"
)]
struct Cli {
    /// Path to the TOML configuration file [default: gathering.toml,
    /// or $GATHERING_SERVICE_CONFIG_FILE when set].
    #[arg(short, long)]
    config: Option<String>,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config.clone(), std::env::var(CONFIG_FILE_ENV).ok());

    // Load configuration from the TOML file, or use defaults if the
    // file does not exist.
    let config_file_found = Path::new(&config_path).exists();
    let config: GatheringConfig = if config_file_found {
        let contents = std::fs::read_to_string(&config_path)?;
        toml::from_str(&contents)
            .map_err(|e| ServerError::Config(format!("cannot parse {config_path}: {e}")))?
    } else {
        GatheringConfig::default()
    };

    init_tracing(&config);

    if !config_file_found {
        info!(path = %config_path, "config file not found, using defaults");
    }

    // Bootstrap owns the existence check; a missing rules path is a
    // deployment error and fatal before anything is served.
    let rules_path = Path::new(&config.storage.rules_path);
    if !rules_path.is_dir() {
        return Err(ServerError::Config(format!(
            "rules path {} does not exist",
            rules_path.display()
        )));
    }

    // Load the rule set once. Any read or parse failure aborts startup
    // here, before the listener is bound.
    let json_loader = JsonLoader;
    let yaml_loader = YamlLoader;
    let loaders: Vec<&dyn RuleLoader> = vec![&json_loader, &yaml_loader];
    let storage = Storage::new(&config.storage, &loaders)?;

    let repository = Repository::new(storage);
    let service = Service::new(repository);

    let state = AppState {
        service: Arc::new(service),
    };
    let app = api::router(state);

    // Resolve the bind address (CLI overrides take precedence).
    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "gathering-server listening");

    // Serve with graceful shutdown on SIGINT / SIGTERM. In-flight
    // requests get a bounded window to drain after the signal.
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_seconds);
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    tokio::select! {
        result = server => result?,
        () = async {
            if shutdown_rx.changed().await.is_ok() {
                tokio::time::sleep(shutdown_timeout).await;
            } else {
                std::future::pending::<()>().await;
            }
        } => {
            warn!(
                timeout_secs = config.server.shutdown_timeout_seconds,
                "shutdown timeout exceeded, aborting in-flight requests"
            );
        }
    }

    info!("gathering-server shut down");
    Ok(())
}

/// Resolve the config file path: explicit `--config` flag first, then
/// the environment variable, then the default.
fn resolve_config_path(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_owned())
}

/// Initialize the tracing subscriber from `RUST_LOG`, falling back to
/// the configured level directive.
fn init_tracing(config: &GatheringConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM, then return to trigger graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}

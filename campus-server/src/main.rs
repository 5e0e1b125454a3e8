use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use campus_server::catalog::Catalog;
use campus_server::config::ServerConfig;
use campus_server::session::Session;
use campus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the catalog (fail fast if a configured file is unusable)
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("failed to load catalog: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        routes = catalog.routes().len(),
        locations = catalog.locations().len(),
        "catalog ready"
    );

    let session = Session::demo(&catalog, Local::now().date_naive());
    let state = AppState::new(catalog, session);
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Campus navigator listening on http://{}", config.addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

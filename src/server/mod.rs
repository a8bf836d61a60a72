use axum::{
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use crate::storage::SqliteStore;

pub mod routes;

/// Server state
///
/// Only the database location is shared; each request opens its own
/// connection and SQLite serializes concurrent writers.
pub struct AppState {
    pub database_path: PathBuf,
}

impl AppState {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }
}

/// Build the API router. Unknown paths fall through to `static_dir`, with
/// `index.html` served for anything that is not a file there.
pub fn router(state: Arc<AppState>, static_dir: PathBuf) -> Router {
    let index = static_dir.join("index.html");
    let assets = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route(
            "/api/references",
            get(routes::list_references).post(routes::create_reference),
        )
        .route(
            "/api/references/{id}",
            get(routes::get_reference)
                .put(routes::update_reference)
                .delete(routes::delete_reference),
        )
        .route("/api/categories", get(routes::list_categories))
        .route("/health", get(routes::health))
        .fallback_service(assets)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind a listener by host name or IP literal (IPv4 or bare IPv6)
pub async fn bind(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

pub async fn start_server(host: &str, port: u16, database_path: PathBuf, static_dir: PathBuf) -> anyhow::Result<()> {
    // Create and seed before accepting requests so the first request never races the seed
    let bootstrap_path = database_path.clone();
    tokio::task::spawn_blocking(move || SqliteStore::bootstrap(&bootstrap_path)).await??;

    let state = Arc::new(AppState::new(database_path));
    let app = router(state, static_dir);

    let listener = bind(host, port).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on {}", addr);
    if !crate::output::is_quiet() {
        println!("{} Server running at http://{}", crate::ui::Icons::GLOBE, addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

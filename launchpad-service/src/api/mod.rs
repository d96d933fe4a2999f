//! REST API for creator verification and token issuance

mod handlers;
mod responses;
mod routes;

pub use responses::*;
pub use routes::*;

use crate::config::ApiConfig;
use crate::database::RecordStore;
use crate::ipfs::MetadataUploader;
use crate::issuance::Issuer;
use crate::oauth::IdentityProvider;
use anyhow::Result;
use axum::{
    http::{header, HeaderName, Method},
    response::Json,
    routing::get,
    Router,
};
use launchpad_sdk::{Cluster, LedgerClient, WalletSession};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Shared API state
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn RecordStore>,
    pub youtube: Arc<dyn IdentityProvider>,
    pub twitch: Arc<dyn IdentityProvider>,
    pub uploader: Arc<dyn MetadataUploader>,
    pub ledger: Arc<dyn LedgerClient>,
    pub issuer: Arc<Issuer>,
    /// Service wallet session; issuance and airdrop report the wallet as
    /// not connected when absent
    pub wallet: Option<Arc<WalletSession>>,
    pub cluster: Cluster,
}

/// Start the API server
pub async fn start_server(
    state: ApiState,
    config: &ApiConfig,
) -> Result<tokio::task::JoinHandle<()>> {
    let app = create_router(state, config);

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("API server listening on {}", config.bind_address);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("API server error: {}", e);
        }
    });

    Ok(handle)
}

/// Create the main API application
pub fn create_router(state: ApiState, config: &ApiConfig) -> Router {
    let mut app = Router::new()
        .merge(create_auth_routes())
        .merge(create_creator_routes())
        .merge(create_token_routes())
        .merge(create_storage_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if config.enable_cors {
        app = app.layer(cors_layer());
    }

    app
}

/// CORS policy mirroring what the browser frontend sends: any origin, with
/// the auth and client-info headers its requests carry
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Health check handler
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "service": "launchpad-service"
    }))
}

//! API route definitions

use super::{handlers::*, ApiState};
use axum::{
    routing::{get, post},
    Router,
};

/// Create OAuth callback routes
pub fn create_auth_routes() -> Router<ApiState> {
    Router::new()
        .route("/auth/youtube", post(youtube_callback))
        .route("/auth/twitch", post(twitch_callback))
}

/// Create creator-status routes
pub fn create_creator_routes() -> Router<ApiState> {
    Router::new()
        .route("/creators/:wallet", get(get_creator_status))
        .route("/creators/:wallet/tokens", get(get_creator_tokens))
}

/// Create token-issuance and listing routes
pub fn create_token_routes() -> Router<ApiState> {
    Router::new()
        .route("/tokens", post(create_token).get(list_tokens))
        .route("/tokens/:mint", get(get_token))
}

/// Create content-storage and faucet routes
pub fn create_storage_routes() -> Router<ApiState> {
    Router::new()
        .route("/storage", post(storage_operation))
        .route("/airdrop", post(request_airdrop))
}

//! API request handlers

use super::{responses::*, ApiState};
use crate::error::{CallbackError, ErrorBody, IssuanceError, LedgerFailure};
use crate::ipfs::StorageRequest;
use crate::oauth::{handle_callback, CallbackRequest};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use base64::Engine;
use launchpad_types::{verification, TokenForm};
use serde::Deserialize;

/// Query parameters for listings
#[derive(Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<usize>,
}

/// YouTube OAuth callback
pub async fn youtube_callback(
    State(state): State<ApiState>,
    Json(request): Json<CallbackRequest>,
) -> Result<Json<CallbackResponse>, CallbackError> {
    let outcome = handle_callback(state.youtube.as_ref(), state.store.as_ref(), request).await?;
    Ok(Json(CallbackResponse {
        success: true,
        verified: outcome.provider_verified,
        subscribers: Some(outcome.profile.audience_count),
        followers: None,
        username: outcome.profile.username,
        profile_image: outcome.profile.profile_image,
    }))
}

/// Twitch OAuth callback
pub async fn twitch_callback(
    State(state): State<ApiState>,
    Json(request): Json<CallbackRequest>,
) -> Result<Json<CallbackResponse>, CallbackError> {
    let outcome = handle_callback(state.twitch.as_ref(), state.store.as_ref(), request).await?;
    Ok(Json(CallbackResponse {
        success: true,
        verified: outcome.provider_verified,
        subscribers: None,
        followers: Some(outcome.profile.audience_count),
        username: outcome.profile.username,
        profile_image: outcome.profile.profile_image,
    }))
}

/// Stored creator record plus the dashboard-eligibility evaluation
pub async fn get_creator_status(
    State(state): State<ApiState>,
    Path(wallet): Path<String>,
) -> Result<Json<CreatorStatusResponse>, StatusCode> {
    let creator = state.store.get_creator(&wallet).await.map_err(|e| {
        tracing::error!(error = %e, "failed to get creator");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let youtube_subscribers = creator
        .as_ref()
        .filter(|c| c.youtube_id.is_some())
        .map(|c| c.youtube_subscribers.max(0) as u64);

    Ok(Json(CreatorStatusResponse {
        status: verification::evaluate(youtube_subscribers),
        creator,
    }))
}

/// Tokens minted by one creator wallet
pub async fn get_creator_tokens(
    State(state): State<ApiState>,
    Path(wallet): Path<String>,
) -> Result<Json<TokensResponse>, StatusCode> {
    let tokens = state
        .store
        .list_tokens_by_creator(&wallet)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to list creator tokens");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let total = tokens.len();
    Ok(Json(TokensResponse { tokens, total }))
}

/// Create a new meme coin with the service wallet session
pub async fn create_token(
    State(state): State<ApiState>,
    Json(form): Json<TokenForm>,
) -> Result<Json<CreateTokenResponse>, IssuanceError> {
    let created = state
        .issuer
        .create_meme_coin(state.wallet.as_deref(), &form)
        .await?;

    Ok(Json(CreateTokenResponse {
        mint_address: created.mint_address,
        token_account: created.token_account,
        signatures: created.signatures,
    }))
}

/// List recently minted tokens
pub async fn list_tokens(
    State(state): State<ApiState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<TokensResponse>, StatusCode> {
    let limit = pagination.limit.unwrap_or(50).min(100) as i64;
    let tokens = state.store.list_recent_tokens(limit).await.map_err(|e| {
        tracing::error!(error = %e, "failed to list tokens");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let total = tokens.len();
    Ok(Json(TokensResponse { tokens, total }))
}

/// Get one token by mint address
pub async fn get_token(
    State(state): State<ApiState>,
    Path(mint): Path<String>,
) -> Result<Json<TokenResponse>, StatusCode> {
    let token = state
        .store
        .get_token(&mint)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match token {
        Some(token) => Ok(Json(TokenResponse { token })),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Content-storage operations: pin a file or structured metadata
pub async fn storage_operation(
    State(state): State<ApiState>,
    Json(request): Json<StorageRequest>,
) -> Result<Json<crate::ipfs::PinResult>, (StatusCode, Json<ErrorBody>)> {
    let result = match request {
        StorageRequest::UploadToIpfs {
            name,
            content_base64,
        } => {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(content_base64.as_bytes())
                .map_err(|e| {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorBody::new(format!("invalid file encoding: {e}"))),
                    )
                })?;
            state.uploader.upload_image(&name, bytes).await
        }
        StorageRequest::CreateMetadata { metadata } => {
            state.uploader.upload_metadata(&metadata).await
        }
    };

    result.map(Json).map_err(|e| {
        tracing::error!(error = %e, "storage operation failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody::new("content storage operation failed")),
        )
    })
}

/// Request a faucet top-up for the service wallet
pub async fn request_airdrop(
    State(state): State<ApiState>,
) -> Result<Json<AirdropResponse>, axum::response::Response> {
    use axum::response::IntoResponse;

    let wallet = state.wallet.as_ref().ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("wallet not connected")),
        )
            .into_response()
    })?;

    let signature = launchpad_sdk::request_airdrop(
        state.ledger.as_ref(),
        state.cluster,
        &wallet.pubkey(),
    )
    .await
    .map_err(|e| LedgerFailure(e).into_response())?;

    Ok(Json(AirdropResponse {
        signature: signature.to_string(),
        lamports: launchpad_types::AIRDROP_LAMPORTS,
    }))
}

//! Service error taxonomy and HTTP mappings

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use launchpad_sdk::SdkError;
use launchpad_types::{Provider, TokenFormError};
use serde::Serialize;
use thiserror::Error;

/// JSON error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            error: error.into(),
            details: Some(details),
        }
    }
}

/// Failures of the OAuth callback flow.
///
/// Client errors (bad input, upstream identity-provider failures) map to
/// 400; store failures map to 500 and are logged with detail server-side.
#[derive(Error, Debug)]
pub enum CallbackError {
    #[error("{0}")]
    InvalidRequest(&'static str),

    #[error("failed to exchange code for token")]
    TokenExchangeFailed { details: serde_json::Value },

    #[error("failed to fetch {provider} profile data")]
    ProfileFetchFailed {
        provider: Provider,
        details: serde_json::Value,
    },

    #[error("no profile data found")]
    NoProfileData,

    #[error("failed to read creator record")]
    StoreReadFailed(#[source] anyhow::Error),

    #[error("failed to write creator record")]
    StoreWriteFailed(#[source] anyhow::Error),
}

impl CallbackError {
    fn status(&self) -> StatusCode {
        match self {
            CallbackError::InvalidRequest(_)
            | CallbackError::TokenExchangeFailed { .. }
            | CallbackError::ProfileFetchFailed { .. }
            | CallbackError::NoProfileData => StatusCode::BAD_REQUEST,
            CallbackError::StoreReadFailed(_) | CallbackError::StoreWriteFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            CallbackError::TokenExchangeFailed { details }
            | CallbackError::ProfileFetchFailed { details, .. } => {
                ErrorBody::with_details(self.to_string(), details.clone())
            }
            CallbackError::StoreReadFailed(source) | CallbackError::StoreWriteFailed(source) => {
                tracing::error!(error = %source, "store operation failed");
                ErrorBody::new(self.to_string())
            }
            _ => ErrorBody::new(self.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

/// Failures of the token-issuance flow, one variant per phase so the caller
/// can tell which phase broke
#[derive(Error, Debug)]
pub enum IssuanceError {
    #[error("wallet not connected")]
    WalletNotConnected,

    #[error("invalid token request: {0}")]
    InvalidRequest(#[from] TokenFormError),

    #[error("failed to upload token metadata")]
    MetadataUploadFailed(#[source] anyhow::Error),

    #[error("wallet balance too low and top-up failed")]
    InsufficientBalance,

    #[error(transparent)]
    Ledger(SdkError),

    #[error("failed to record created token")]
    StoreWriteFailed(#[source] anyhow::Error),
}

impl From<SdkError> for IssuanceError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::InsufficientBalance | SdkError::InsufficientFunds => {
                IssuanceError::InsufficientBalance
            }
            other => IssuanceError::Ledger(other),
        }
    }
}

impl IssuanceError {
    /// User-facing guidance, tailored per failure category
    pub fn user_message(&self) -> String {
        match self {
            IssuanceError::WalletNotConnected => {
                "Connect a wallet before creating a token.".to_string()
            }
            IssuanceError::InvalidRequest(e) => e.to_string(),
            IssuanceError::MetadataUploadFailed(_) => {
                "Could not upload token metadata to content storage. Try again later.".to_string()
            }
            IssuanceError::InsufficientBalance => {
                "Your wallet doesn't have enough SOL to pay for this transaction. \
                 Request devnet SOL and try again."
                    .to_string()
            }
            IssuanceError::Ledger(SdkError::RpcUnavailable(_)) => {
                "Cannot reach the Solana RPC endpoint. Try again later.".to_string()
            }
            IssuanceError::Ledger(SdkError::WalletRejected(_)) => {
                "The wallet refused to sign the transaction.".to_string()
            }
            IssuanceError::Ledger(e) => format!("Failed to create token: {e}"),
            IssuanceError::StoreWriteFailed(_) => {
                "The token was minted but recording it failed. Contact support with your \
                 mint address."
                    .to_string()
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            IssuanceError::WalletNotConnected
            | IssuanceError::InvalidRequest(_)
            | IssuanceError::InsufficientBalance => StatusCode::BAD_REQUEST,
            IssuanceError::MetadataUploadFailed(_) | IssuanceError::Ledger(_) => {
                StatusCode::BAD_GATEWAY
            }
            IssuanceError::StoreWriteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for IssuanceError {
    fn into_response(self) -> Response {
        if let IssuanceError::StoreWriteFailed(source) = &self {
            tracing::error!(error = %source, "token record write failed");
        }
        let body = ErrorBody::with_details(
            self.user_message(),
            serde_json::json!({ "phase": self.to_string() }),
        );
        (self.status(), Json(body)).into_response()
    }
}

/// Wrapper giving ledger failures an HTTP mapping outside the issuance flow
/// (airdrop endpoint)
#[derive(Debug)]
pub struct LedgerFailure(pub SdkError);

impl IntoResponse for LedgerFailure {
    fn into_response(self) -> Response {
        let status = match self.0 {
            SdkError::UnsupportedOnMainnet => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        };
        (status, Json(ErrorBody::new(self.0.to_string()))).into_response()
    }
}

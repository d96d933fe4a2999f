//! API response types

use launchpad_types::{CreatorRecord, TokenRecord, VerificationStatus};
use serde::{Deserialize, Serialize};

/// Response for a completed OAuth callback
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackResponse {
    pub success: bool,
    /// Whether this provider's threshold was met on this callback
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    pub username: String,
    pub profile_image: String,
}

/// Response for a creator-status lookup
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatorStatusResponse {
    pub creator: Option<CreatorRecord>,
    pub status: VerificationStatus,
}

/// Response for a successful token issuance
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenResponse {
    pub mint_address: String,
    pub token_account: String,
    pub signatures: Vec<String>,
}

/// Response for token listings
#[derive(Debug, Serialize, Deserialize)]
pub struct TokensResponse {
    pub tokens: Vec<TokenRecord>,
    pub total: usize,
}

/// Response for a single token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: TokenRecord,
}

/// Response for a faucet top-up
#[derive(Debug, Serialize, Deserialize)]
pub struct AirdropResponse {
    pub signature: String,
    pub lamports: u64,
}

//! Creator verification via OAuth identity providers

pub mod callback;
pub mod twitch;
pub mod youtube;

pub use callback::*;
pub use twitch::TwitchProvider;
pub use youtube::YoutubeProvider;

use crate::error::CallbackError;
use async_trait::async_trait;
use launchpad_types::{CreatorProfile, Provider};

/// One external identity provider: exchanges an authorization code for an
/// access token, then fetches the authenticated identity's profile and
/// audience statistics.
///
/// All exchange steps run server-side; client credentials never reach the
/// browser.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn provider(&self) -> Provider;

    /// Exchange an authorization code for an access token
    async fn exchange_code(&self, code: &str) -> Result<String, CallbackError>;

    /// Fetch the authenticated identity's profile and audience count
    async fn fetch_profile(&self, access_token: &str) -> Result<CreatorProfile, CallbackError>;
}

/// Shared shape of the providers' token-endpoint responses
#[derive(Debug, serde::Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

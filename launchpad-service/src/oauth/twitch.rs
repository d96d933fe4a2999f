//! Twitch identity provider

use super::{IdentityProvider, TokenResponse};
use crate::config::ProviderConfig;
use crate::error::CallbackError;
use async_trait::async_trait;
use launchpad_types::{CreatorProfile, Provider};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

const TOKEN_ENDPOINT: &str = "https://id.twitch.tv/oauth2/token";
const USERS_ENDPOINT: &str = "https://api.twitch.tv/helix/users";
const FOLLOWS_ENDPOINT: &str = "https://api.twitch.tv/helix/users/follows";

pub struct TwitchProvider {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl TwitchProvider {
    pub fn new(http: reqwest::Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }

    /// Total follower count for a user. A failed lookup degrades to zero
    /// rather than failing the whole callback.
    async fn follower_count(&self, access_token: &str, user_id: &str) -> u64 {
        let response = self
            .http
            .get(FOLLOWS_ENDPOINT)
            .query(&[("to_id", user_id)])
            .header("Client-ID", &self.config.client_id)
            .bearer_auth(access_token)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => response
                .json::<FollowsResponse>()
                .await
                .map(|f| f.total.unwrap_or(0))
                .unwrap_or_else(|e| {
                    warn!(error = %e, "failed to parse Twitch follower count");
                    0
                }),
            Ok(response) => {
                warn!(status = %response.status(), "failed to fetch Twitch follower count");
                0
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch Twitch follower count");
                0
            }
        }
    }
}

#[async_trait]
impl IdentityProvider for TwitchProvider {
    fn provider(&self) -> Provider {
        Provider::Twitch
    }

    async fn exchange_code(&self, code: &str) -> Result<String, CallbackError> {
        debug!("exchanging authorization code with Twitch");
        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CallbackError::TokenExchangeFailed {
                details: json!({ "error": e.to_string() }),
            })?;

        if !response.status().is_success() {
            let details = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            return Err(CallbackError::TokenExchangeFailed { details });
        }

        let token: TokenResponse =
            response
                .json()
                .await
                .map_err(|e| CallbackError::TokenExchangeFailed {
                    details: json!({ "error": e.to_string() }),
                })?;
        Ok(token.access_token)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<CreatorProfile, CallbackError> {
        let fetch_failed = |details: serde_json::Value| CallbackError::ProfileFetchFailed {
            provider: Provider::Twitch,
            details,
        };

        let response = self
            .http
            .get(USERS_ENDPOINT)
            .header("Client-ID", &self.config.client_id)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| fetch_failed(json!({ "error": e.to_string() })))?;

        if !response.status().is_success() {
            let details = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            return Err(fetch_failed(details));
        }

        let users: UsersResponse = response
            .json()
            .await
            .map_err(|e| fetch_failed(json!({ "error": e.to_string() })))?;

        let user = users
            .data
            .into_iter()
            .next()
            .ok_or(CallbackError::NoProfileData)?;

        let followers = self.follower_count(access_token, &user.id).await;
        info!(user_id = %user.id, username = %user.login, followers, "fetched Twitch user data");

        Ok(CreatorProfile {
            provider: Provider::Twitch,
            external_id: user.id,
            username: user.login,
            profile_image: user.profile_image_url,
            audience_count: followers,
        })
    }
}

#[derive(Debug, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    data: Vec<TwitchUser>,
}

#[derive(Debug, Deserialize)]
struct TwitchUser {
    id: String,
    login: String,
    #[serde(default)]
    profile_image_url: String,
}

#[derive(Debug, Deserialize)]
struct FollowsResponse {
    total: Option<u64>,
}

//! YouTube identity provider

use super::{IdentityProvider, TokenResponse};
use crate::config::ProviderConfig;
use crate::error::CallbackError;
use async_trait::async_trait;
use launchpad_types::{CreatorProfile, Provider};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const CHANNELS_ENDPOINT: &str =
    "https://www.googleapis.com/youtube/v3/channels?part=snippet,statistics&mine=true";

pub struct YoutubeProvider {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl YoutubeProvider {
    pub fn new(http: reqwest::Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl IdentityProvider for YoutubeProvider {
    fn provider(&self) -> Provider {
        Provider::Youtube
    }

    async fn exchange_code(&self, code: &str) -> Result<String, CallbackError> {
        debug!("exchanging authorization code with YouTube");
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
            provider: Provider::Youtube,
            details,
        };

        let response = self
            .http
            .get(CHANNELS_ENDPOINT)
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

        let channels: ChannelListResponse = response
            .json()
            .await
            .map_err(|e| fetch_failed(json!({ "error": e.to_string() })))?;

        let channel = channels
            .items
            .into_iter()
            .next()
            .ok_or(CallbackError::NoProfileData)?;

        let subscribers = channel
            .statistics
            .subscriber_count
            .as_deref()
            .and_then(|count| count.parse().ok())
            .unwrap_or(0);

        info!(
            channel_id = %channel.id,
            username = %channel.snippet.title,
            subscribers,
            "fetched YouTube channel data"
        );

        Ok(CreatorProfile {
            provider: Provider::Youtube,
            external_id: channel.id,
            username: channel.snippet.title,
            profile_image: channel.snippet.thumbnails.default.url,
            audience_count: subscribers,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
struct Channel {
    id: String,
    snippet: ChannelSnippet,
    statistics: ChannelStatistics,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    default: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelStatistics {
    // The API reports counts as strings
    subscriber_count: Option<String>,
}

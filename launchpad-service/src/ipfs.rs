//! Content-addressed storage for token images and metadata

use crate::config::StorageConfig;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use launchpad_types::PLACEHOLDER_IMAGE_URL;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

/// A pinned object: content identifier plus a retrievable URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinResult {
    pub cid: String,
    pub url: String,
}

/// Structured token metadata uploaded alongside the image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub creator_wallet: Option<String>,
    #[serde(default)]
    pub creator_youtube: Option<String>,
}

impl TokenMetadata {
    /// Metadata JSON in the shape wallets and explorers expect
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "name": self.name,
            "symbol": self.symbol,
            "description": self.description,
            "image": self.image,
            "properties": {
                "files": [{ "uri": self.image, "type": "image/png" }],
                "creators": [{
                    "address": self.creator_wallet.clone().unwrap_or_default(),
                    "share": 100,
                }],
            },
            "attributes": [
                {
                    "trait_type": "Creator Wallet",
                    "value": self.creator_wallet.clone().unwrap_or_default(),
                },
                {
                    "trait_type": "Creator YouTube",
                    "value": self.creator_youtube.clone().unwrap_or_default(),
                },
            ],
        })
    }
}

/// Operations accepted by the storage endpoint
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", content = "data", rename_all = "kebab-case")]
pub enum StorageRequest {
    UploadToIpfs {
        name: String,
        /// File bytes, base64-encoded for JSON transport
        content_base64: String,
    },
    CreateMetadata {
        metadata: TokenMetadata,
    },
}

/// Uploads token images and metadata to persistent storage
#[async_trait]
pub trait MetadataUploader: Send + Sync {
    async fn upload_image(&self, name: &str, bytes: Vec<u8>) -> Result<PinResult>;

    async fn upload_metadata(&self, metadata: &TokenMetadata) -> Result<PinResult>;
}

/// Pins through the Pinata API with a server-side JWT
pub struct PinataUploader {
    http: reqwest::Client,
    config: StorageConfig,
}

impl PinataUploader {
    pub fn new(http: reqwest::Client, config: StorageConfig) -> Self {
        Self { http, config }
    }

    fn gateway_url(&self, cid: &str) -> String {
        format!("https://{}/ipfs/{}", self.config.gateway, cid)
    }
}

#[async_trait]
impl MetadataUploader for PinataUploader {
    async fn upload_image(&self, name: &str, bytes: Vec<u8>) -> Result<PinResult> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part).text(
            "pinataMetadata",
            json!({
                "name": name,
                "keyvalues": { "app": "launchpad", "type": "token-image" },
            })
            .to_string(),
        );

        let response = self
            .http
            .post(format!("{}/pinning/pinFileToIPFS", self.config.api_url))
            .bearer_auth(&self.config.jwt)
            .multipart(form)
            .send()
            .await
            .context("image pin request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!("image pin rejected: {}", response.status()));
        }

        let pinned: PinataPinResponse = response
            .json()
            .await
            .context("failed to parse pin response")?;
        let url = self.gateway_url(&pinned.ipfs_hash);
        info!(cid = %pinned.ipfs_hash, "image pinned");

        Ok(PinResult {
            cid: pinned.ipfs_hash,
            url,
        })
    }

    async fn upload_metadata(&self, metadata: &TokenMetadata) -> Result<PinResult> {
        let body = json!({
            "pinataContent": metadata.to_json(),
            "pinataMetadata": {
                "name": format!("memecoin-metadata-{}-{}", metadata.symbol, Utc::now().timestamp()),
                "keyvalues": {
                    "app": "launchpad",
                    "type": "token-metadata",
                    "tokenSymbol": metadata.symbol,
                },
            },
        });

        let response = self
            .http
            .post(format!("{}/pinning/pinJSONToIPFS", self.config.api_url))
            .bearer_auth(&self.config.jwt)
            .json(&body)
            .send()
            .await
            .context("metadata pin request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!("metadata pin rejected: {}", response.status()));
        }

        let pinned: PinataPinResponse = response
            .json()
            .await
            .context("failed to parse pin response")?;
        let url = self.gateway_url(&pinned.ipfs_hash);
        info!(cid = %pinned.ipfs_hash, symbol = %metadata.symbol, "metadata pinned");

        Ok(PinResult {
            cid: pinned.ipfs_hash,
            url,
        })
    }
}

#[derive(Debug, Deserialize)]
struct PinataPinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// Stand-in uploader used when no pinning credentials are configured:
/// substitutes a fixed image and a timestamped placeholder metadata URL
pub struct PlaceholderUploader;

#[async_trait]
impl MetadataUploader for PlaceholderUploader {
    async fn upload_image(&self, _name: &str, _bytes: Vec<u8>) -> Result<PinResult> {
        Ok(PinResult {
            cid: String::new(),
            url: PLACEHOLDER_IMAGE_URL.to_string(),
        })
    }

    async fn upload_metadata(&self, _metadata: &TokenMetadata) -> Result<PinResult> {
        Ok(PinResult {
            cid: String::new(),
            url: format!(
                "https://ipfs.io/ipfs/placeholder-metadata-{}",
                Utc::now().timestamp_millis()
            ),
        })
    }
}

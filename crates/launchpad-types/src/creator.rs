//! Creator records and identity-provider profiles

use crate::constants::{TWITCH_FOLLOWER_THRESHOLD, YOUTUBE_SUBSCRIBER_THRESHOLD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity providers a creator can link to their wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Youtube,
    Twitch,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Youtube => "youtube",
            Provider::Twitch => "twitch",
        }
    }

    /// Audience size at which this provider's verified badge is earned
    pub fn threshold(&self) -> u64 {
        match self {
            Provider::Youtube => YOUTUBE_SUBSCRIBER_THRESHOLD,
            Provider::Twitch => TWITCH_FOLLOWER_THRESHOLD,
        }
    }

    /// What this provider calls its audience count
    pub fn count_label(&self) -> &'static str {
        match self {
            Provider::Youtube => "subscribers",
            Provider::Twitch => "followers",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile data fetched from an identity provider after a successful
/// OAuth exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub provider: Provider,
    pub external_id: String,
    pub username: String,
    pub profile_image: String,
    pub audience_count: u64,
}

impl CreatorProfile {
    /// Whether this profile clears its provider's verified-badge threshold
    pub fn meets_threshold(&self) -> bool {
        self.audience_count >= self.provider.threshold()
    }
}

/// Durable per-wallet creator record
///
/// Created on the first successful OAuth callback for a wallet and updated
/// on each subsequent one, independently per provider: merging a YouTube
/// profile never touches the Twitch columns and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub wallet_address: String,

    pub youtube_id: Option<String>,
    pub youtube_username: Option<String>,
    pub youtube_profile_image: Option<String>,
    pub youtube_subscribers: i64,
    pub youtube_verified: bool,

    pub twitch_id: Option<String>,
    pub twitch_username: Option<String>,
    pub twitch_profile_image: Option<String>,
    pub twitch_followers: i64,
    pub twitch_verified: bool,

    /// Always the OR of the per-provider verified flags
    pub verified: bool,
    /// Deduplicated names of the providers that verified this creator
    pub verified_by: Vec<String>,
}

impl CreatorRecord {
    /// Empty record for a wallet, no provider linked yet
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            wallet_address: wallet_address.into(),
            youtube_id: None,
            youtube_username: None,
            youtube_profile_image: None,
            youtube_subscribers: 0,
            youtube_verified: false,
            twitch_id: None,
            twitch_username: None,
            twitch_profile_image: None,
            twitch_followers: 0,
            twitch_verified: false,
            verified: false,
            verified_by: Vec::new(),
        }
    }

    /// Fresh record seeded from a provider profile
    pub fn from_profile(wallet_address: impl Into<String>, profile: &CreatorProfile) -> Self {
        let mut record = Self::new(wallet_address);
        record.merge_profile(profile);
        record
    }

    /// Merge a freshly fetched profile into this record.
    ///
    /// Only the profile's provider columns are replaced. `verified` is
    /// recomputed as the OR of both provider flags and `verified_by` as the
    /// deduplicated union of the previously stored names and this result.
    pub fn merge_profile(&mut self, profile: &CreatorProfile) {
        let provider_verified = profile.meets_threshold();
        match profile.provider {
            Provider::Youtube => {
                self.youtube_id = Some(profile.external_id.clone());
                self.youtube_username = Some(profile.username.clone());
                self.youtube_profile_image = Some(profile.profile_image.clone());
                self.youtube_subscribers =
                    i64::try_from(profile.audience_count).unwrap_or(i64::MAX);
                self.youtube_verified = provider_verified;
            }
            Provider::Twitch => {
                self.twitch_id = Some(profile.external_id.clone());
                self.twitch_username = Some(profile.username.clone());
                self.twitch_profile_image = Some(profile.profile_image.clone());
                self.twitch_followers =
                    i64::try_from(profile.audience_count).unwrap_or(i64::MAX);
                self.twitch_verified = provider_verified;
            }
        }
        self.verified = self.youtube_verified || self.twitch_verified;
        let name = profile.provider.as_str().to_string();
        if provider_verified {
            if !self.verified_by.contains(&name) {
                self.verified_by.push(name);
            }
        } else {
            self.verified_by.retain(|p| *p != name);
        }
    }

    pub fn provider_verified(&self, provider: Provider) -> bool {
        match provider {
            Provider::Youtube => self.youtube_verified,
            Provider::Twitch => self.twitch_verified,
        }
    }
}

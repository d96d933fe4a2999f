//! Pure verification evaluator used to gate the dashboard

use crate::constants::ELIGIBILITY_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a wallet's linked audience counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatus {
    pub verified: bool,
    pub verified_by: Vec<String>,
    pub eligible_for_meme_coin: bool,
    pub youtube_subscribers: Option<u64>,
}

/// Whether a fetched audience count clears a threshold. `None` means the
/// provider was never linked and always fails.
pub fn meets_threshold(count: Option<u64>, threshold: u64) -> bool {
    matches!(count, Some(c) if c >= threshold)
}

/// Evaluate dashboard access for a wallet.
///
/// This is a linkage gate: any fetched subscriber count, including zero,
/// means a YouTube account was linked and the wallet may enter the meme-coin
/// dashboard. The stored verified badge is a separate, stricter rule
/// ([`crate::constants::YOUTUBE_SUBSCRIBER_THRESHOLD`]) applied by the OAuth
/// callback handler. Both rules go through [`meets_threshold`].
///
/// Deterministic and side-effect free.
pub fn evaluate(youtube_subscribers: Option<u64>) -> VerificationStatus {
    let mut verified_by = Vec::new();
    if meets_threshold(youtube_subscribers, ELIGIBILITY_THRESHOLD) {
        verified_by.push("youtube".to_string());
    }

    VerificationStatus {
        verified: !verified_by.is_empty(),
        eligible_for_meme_coin: !verified_by.is_empty(),
        verified_by,
        youtube_subscribers,
    }
}

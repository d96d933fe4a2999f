//! OAuth callback flow: exchange, fetch, upsert

use super::IdentityProvider;
use crate::database::CreatorStore;
use crate::error::CallbackError;
use launchpad_types::{CreatorProfile, CreatorRecord};
use serde::Deserialize;
use tracing::info;

/// JSON body posted by the frontend after the provider redirects back
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub wallet_address: Option<String>,
}

/// Result of a completed callback
#[derive(Debug)]
pub struct CallbackOutcome {
    /// Whether this provider's threshold was met on this callback
    pub provider_verified: bool,
    /// The merged record as stored
    pub record: CreatorRecord,
    pub profile: CreatorProfile,
}

/// Run the callback flow for one provider.
///
/// Validates input before touching the store, performs the code exchange and
/// profile fetch against the provider, then upserts the wallet's creator
/// record: insert on first contact, per-provider merge on every later one.
/// At most one store write happens per call.
pub async fn handle_callback(
    provider: &dyn IdentityProvider,
    store: &dyn CreatorStore,
    request: CallbackRequest,
) -> Result<CallbackOutcome, CallbackError> {
    let code = request
        .code
        .filter(|c| !c.is_empty())
        .ok_or(CallbackError::InvalidRequest("missing authorization code"))?;
    let wallet_address = request
        .wallet_address
        .filter(|w| !w.is_empty())
        .ok_or(CallbackError::InvalidRequest("missing wallet address"))?;

    let access_token = provider.exchange_code(&code).await?;
    let profile = provider.fetch_profile(&access_token).await?;
    let provider_verified = profile.meets_threshold();

    let existing = store
        .get_creator(&wallet_address)
        .await
        .map_err(CallbackError::StoreReadFailed)?;

    let record = match existing {
        Some(mut record) => {
            record.merge_profile(&profile);
            store
                .update_creator(&record)
                .await
                .map_err(CallbackError::StoreWriteFailed)?;
            record
        }
        None => {
            let record = CreatorRecord::from_profile(wallet_address.as_str(), &profile);
            store
                .insert_creator(&record)
                .await
                .map_err(CallbackError::StoreWriteFailed)?;
            record
        }
    };

    info!(
        wallet = %wallet_address,
        provider = %profile.provider,
        audience = profile.audience_count,
        verified = provider_verified,
        "creator record saved"
    );

    Ok(CallbackOutcome {
        provider_verified,
        record,
        profile,
    })
}

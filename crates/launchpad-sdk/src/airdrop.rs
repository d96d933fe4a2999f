//! Test-network faucet assist

use crate::client::LedgerClient;
use crate::config::Cluster;
use crate::errors::{SdkError, SdkResult};
use launchpad_types::AIRDROP_LAMPORTS;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use tracing::info;

/// Request supplemental funds from the cluster faucet and await
/// confirmation.
///
/// Fails fast with [`SdkError::UnsupportedOnMainnet`] before any RPC call
/// when the cluster has no faucet.
pub async fn request_airdrop(
    ledger: &dyn LedgerClient,
    cluster: Cluster,
    owner: &Pubkey,
) -> SdkResult<Signature> {
    if !cluster.airdrops_enabled() {
        return Err(SdkError::UnsupportedOnMainnet);
    }

    let signature = ledger
        .request_airdrop(owner, AIRDROP_LAMPORTS)
        .await
        .map_err(|e| SdkError::AirdropFailed(e.to_string()))?;
    ledger
        .confirm(&signature)
        .await
        .map_err(|e| SdkError::AirdropFailed(e.to_string()))?;

    info!(%owner, lamports = AIRDROP_LAMPORTS, "airdrop confirmed");
    Ok(signature)
}

//! Token-issuance orchestration
//!
//! Validates the request, tops up the wallet if needed, resolves creator
//! display data, runs the on-chain mint sequence, and records the token.
//! A TokenRecord is written only after every on-chain step confirmed; a
//! partial on-chain failure writes nothing and performs no rollback.

use crate::database::RecordStore;
use crate::error::IssuanceError;
use crate::ipfs::{MetadataUploader, TokenMetadata};
use launchpad_sdk::{issuance, Cluster, LedgerClient, WalletSession};
use launchpad_types::{TokenForm, TokenRecord, PLACEHOLDER_IMAGE_URL};
use std::sync::Arc;
use tracing::{info, warn};

/// The minted token as reported to the caller
#[derive(Debug)]
pub struct CreatedToken {
    pub mint_address: String,
    pub token_account: String,
    pub signatures: Vec<String>,
    pub record: TokenRecord,
}

/// Issues tokens against one cluster and one record store
pub struct Issuer {
    ledger: Arc<dyn LedgerClient>,
    store: Arc<dyn RecordStore>,
    uploader: Arc<dyn MetadataUploader>,
    cluster: Cluster,
    min_operating_lamports: u64,
}

impl Issuer {
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        store: Arc<dyn RecordStore>,
        uploader: Arc<dyn MetadataUploader>,
        cluster: Cluster,
        min_operating_lamports: u64,
    ) -> Self {
        Self {
            ledger,
            store,
            uploader,
            cluster,
            min_operating_lamports,
        }
    }

    /// Create a meme coin for the session wallet.
    ///
    /// Retrying after a failure mints a new token; attempts are not
    /// idempotent because the mint identity is generated fresh each time.
    pub async fn create_meme_coin(
        &self,
        session: Option<&WalletSession>,
        form: &TokenForm,
    ) -> Result<CreatedToken, IssuanceError> {
        let session = session.ok_or(IssuanceError::WalletNotConnected)?;
        form.validate()?;

        let wallet_address = session.pubkey().to_string();
        info!(
            wallet = %wallet_address,
            name = %form.name,
            symbol = %form.normalized_symbol(),
            "starting meme coin creation"
        );

        // One automatic top-up attempt on test networks before giving up
        issuance::ensure_operating_balance(
            self.ledger.as_ref(),
            self.cluster,
            &session.pubkey(),
            self.min_operating_lamports,
        )
        .await?;

        // Best-effort creator lookup; failure is logged, never surfaced
        let creator_youtube = match &form.creator_youtube {
            Some(username) => Some(username.clone()),
            None => match self.store.youtube_username(&wallet_address).await {
                Ok(username) => username,
                Err(e) => {
                    warn!(error = %e, "could not fetch creator YouTube info");
                    None
                }
            },
        };

        let image_url = form
            .image_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
        let metadata = TokenMetadata {
            name: form.name.trim().to_string(),
            symbol: form.normalized_symbol(),
            description: form.description.clone(),
            image: image_url.clone(),
            creator_wallet: Some(wallet_address.clone()),
            creator_youtube,
        };
        let metadata_url = self
            .uploader
            .upload_metadata(&metadata)
            .await
            .map_err(IssuanceError::MetadataUploadFailed)?
            .url;

        let minted = issuance::create_token(self.ledger.as_ref(), session, form.initial_supply)
            .await?;
        let mint_address = minted.mint.to_string();

        let record = TokenRecord::from_form(
            form,
            wallet_address,
            mint_address.clone(),
            image_url,
            metadata_url,
        );
        self.store
            .insert_token(&record)
            .await
            .map_err(IssuanceError::StoreWriteFailed)?;

        info!(mint = %mint_address, "meme coin created");
        Ok(CreatedToken {
            mint_address,
            token_account: minted.token_account.to_string(),
            signatures: minted
                .signatures
                .iter()
                .map(|s| s.to_string())
                .collect(),
            record,
        })
    }
}

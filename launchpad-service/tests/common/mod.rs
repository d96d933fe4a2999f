//! Shared test doubles: in-memory store, scripted identity provider,
//! recording ledger

#![allow(dead_code)]

use async_trait::async_trait;
use launchpad_sdk::{Cluster, LedgerClient, SdkError, SdkResult, WalletSession};
use launchpad_service::api::ApiState;
use launchpad_service::config::ApiConfig;
use launchpad_service::database::{CreatorStore, TokenStore};
use launchpad_service::error::CallbackError;
use launchpad_service::ipfs::{MetadataUploader, PinResult, TokenMetadata};
use launchpad_service::issuance::Issuer;
use launchpad_service::oauth::IdentityProvider;
use launchpad_types::{CreatorProfile, CreatorRecord, Provider, TokenRecord};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory record store counting every read and write
#[derive(Default)]
pub struct MemoryStore {
    pub creators: Mutex<HashMap<String, CreatorRecord>>,
    pub tokens: Mutex<Vec<TokenRecord>>,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
    pub fail_token_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }
}

#[async_trait]
impl CreatorStore for MemoryStore {
    async fn get_creator(&self, wallet_address: &str) -> anyhow::Result<Option<CreatorRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.creators.lock().unwrap().get(wallet_address).cloned())
    }

    async fn insert_creator(&self, record: &CreatorRecord) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.creators
            .lock()
            .unwrap()
            .insert(record.wallet_address.clone(), record.clone());
        Ok(())
    }

    async fn update_creator(&self, record: &CreatorRecord) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.creators
            .lock()
            .unwrap()
            .insert(record.wallet_address.clone(), record.clone());
        Ok(())
    }

    async fn youtube_username(&self, wallet_address: &str) -> anyhow::Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .creators
            .lock()
            .unwrap()
            .get(wallet_address)
            .and_then(|r| r.youtube_username.clone()))
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn insert_token(&self, record: &TokenRecord) -> anyhow::Result<()> {
        if self.fail_token_writes.load(Ordering::SeqCst) {
            anyhow::bail!("simulated write failure");
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.tokens.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn get_token(&self, mint_address: &str) -> anyhow::Result<Option<TokenRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token_mint_address == mint_address)
            .cloned())
    }

    async fn list_tokens_by_creator(
        &self,
        wallet_address: &str,
    ) -> anyhow::Result<Vec<TokenRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.creator_wallet_address == wallet_address)
            .cloned()
            .collect())
    }

    async fn list_recent_tokens(&self, limit: i64) -> anyhow::Result<Vec<TokenRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens.iter().rev().take(limit as usize).cloned().collect())
    }
}

/// Identity provider that skips the network and returns a scripted profile
pub struct MockProvider {
    pub provider: Provider,
    pub profile: CreatorProfile,
}

impl MockProvider {
    pub fn youtube(subscribers: u64) -> Self {
        Self {
            provider: Provider::Youtube,
            profile: CreatorProfile {
                provider: Provider::Youtube,
                external_id: "UC123".to_string(),
                username: "gamer".to_string(),
                profile_image: "https://img.example/gamer.png".to_string(),
                audience_count: subscribers,
            },
        }
    }

    pub fn twitch(followers: u64) -> Self {
        Self {
            provider: Provider::Twitch,
            profile: CreatorProfile {
                provider: Provider::Twitch,
                external_id: "44322889".to_string(),
                username: "streamer".to_string(),
                profile_image: "https://img.example/streamer.png".to_string(),
                audience_count: followers,
            },
        }
    }
}

#[async_trait]
impl IdentityProvider for MockProvider {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn exchange_code(&self, _code: &str) -> Result<String, CallbackError> {
        Ok("mock-access-token".to_string())
    }

    async fn fetch_profile(&self, _access_token: &str) -> Result<CreatorProfile, CallbackError> {
        Ok(self.profile.clone())
    }
}

/// Ledger double recording submissions, optionally failing the Nth one
pub struct MockLedger {
    pub balance: Mutex<u64>,
    pub submitted: Mutex<Vec<Transaction>>,
    pub fail_at_submission: Option<usize>,
}

impl MockLedger {
    pub fn new(balance: u64) -> Self {
        Self {
            balance: Mutex::new(balance),
            submitted: Mutex::new(Vec::new()),
            fail_at_submission: None,
        }
    }

    pub fn failing_at(balance: u64, n: usize) -> Self {
        Self {
            fail_at_submission: Some(n),
            ..Self::new(balance)
        }
    }

    pub fn submissions(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn balance(&self, _owner: &Pubkey) -> SdkResult<u64> {
        Ok(*self.balance.lock().unwrap())
    }

    async fn minimum_rent_exempt_balance(&self, _data_len: usize) -> SdkResult<u64> {
        Ok(2_039_280)
    }

    async fn latest_blockhash(&self) -> SdkResult<Hash> {
        Ok(Hash::default())
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> SdkResult<Signature> {
        let mut submitted = self.submitted.lock().unwrap();
        if self.fail_at_submission == Some(submitted.len() + 1) {
            return Err(SdkError::TransactionFailed("simulated failure".into()));
        }
        submitted.push(transaction.clone());
        Ok(Signature::default())
    }

    async fn request_airdrop(&self, _owner: &Pubkey, lamports: u64) -> SdkResult<Signature> {
        *self.balance.lock().unwrap() += lamports;
        Ok(Signature::default())
    }

    async fn confirm(&self, _signature: &Signature) -> SdkResult<()> {
        Ok(())
    }
}

/// Uploader double that always refuses, for metadata-failure paths
pub struct FailingUploader;

#[async_trait]
impl MetadataUploader for FailingUploader {
    async fn upload_image(&self, _name: &str, _bytes: Vec<u8>) -> anyhow::Result<PinResult> {
        anyhow::bail!("pinning service unavailable")
    }

    async fn upload_metadata(&self, _metadata: &TokenMetadata) -> anyhow::Result<PinResult> {
        anyhow::bail!("pinning service unavailable")
    }
}

/// Uploader double returning a fixed pinned URL
pub struct MockUploader;

#[async_trait]
impl MetadataUploader for MockUploader {
    async fn upload_image(&self, _name: &str, _bytes: Vec<u8>) -> anyhow::Result<PinResult> {
        Ok(PinResult {
            cid: "QmImage".to_string(),
            url: "https://ipfs.io/ipfs/QmImage".to_string(),
        })
    }

    async fn upload_metadata(&self, _metadata: &TokenMetadata) -> anyhow::Result<PinResult> {
        Ok(PinResult {
            cid: "QmMeta".to_string(),
            url: "https://ipfs.io/ipfs/QmMeta".to_string(),
        })
    }
}

/// Full API state wired to in-memory doubles
pub fn test_state(store: Arc<MemoryStore>, ledger: Arc<MockLedger>) -> ApiState {
    let uploader: Arc<dyn MetadataUploader> = Arc::new(MockUploader);
    let issuer = Arc::new(Issuer::new(
        ledger.clone(),
        store.clone(),
        uploader.clone(),
        Cluster::Devnet,
        launchpad_types::MIN_OPERATING_LAMPORTS,
    ));

    ApiState {
        store,
        youtube: Arc::new(MockProvider::youtube(1_500)),
        twitch: Arc::new(MockProvider::twitch(600)),
        uploader,
        ledger,
        issuer,
        wallet: Some(Arc::new(WalletSession::new(Keypair::new()))),
        cluster: Cluster::Devnet,
    }
}

pub fn test_api_config() -> ApiConfig {
    ApiConfig {
        bind_address: "127.0.0.1:0".to_string(),
        enable_cors: true,
        request_timeout_secs: 30,
    }
}

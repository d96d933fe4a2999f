//! Token-issuance orchestration against in-memory doubles

mod common;

use common::{FailingUploader, MemoryStore, MockLedger, MockUploader};
use launchpad_sdk::{Cluster, WalletSession};
use launchpad_service::error::IssuanceError;
use launchpad_service::ipfs::MetadataUploader;
use launchpad_service::issuance::Issuer;
use launchpad_types::{PriceUnit, TokenForm};
use rust_decimal::Decimal;
use solana_sdk::signature::Keypair;
use std::sync::Arc;

fn form() -> TokenForm {
    TokenForm {
        name: "Doge Prime".to_string(),
        symbol: "doge".to_string(),
        description: "much coin".to_string(),
        initial_supply: 1_000_000,
        starting_price: Decimal::new(5, 3),
        price_unit: PriceUnit::Sol,
        image_url: None,
        creator_youtube: None,
    }
}

fn issuer(store: Arc<MemoryStore>, ledger: Arc<MockLedger>) -> Issuer {
    issuer_with_uploader(store, ledger, Arc::new(MockUploader))
}

fn issuer_with_uploader(
    store: Arc<MemoryStore>,
    ledger: Arc<MockLedger>,
    uploader: Arc<dyn MetadataUploader>,
) -> Issuer {
    Issuer::new(
        ledger,
        store,
        uploader,
        Cluster::Devnet,
        launchpad_types::MIN_OPERATING_LAMPORTS,
    )
}

#[tokio::test]
async fn successful_issuance_records_the_token() {
    let store = Arc::new(MemoryStore::new());
    let ledger = Arc::new(MockLedger::new(1_000_000_000));
    let session = WalletSession::new(Keypair::new());
    let wallet = session.pubkey().to_string();

    let created = issuer(store.clone(), ledger.clone())
        .create_meme_coin(Some(&session), &form())
        .await
        .unwrap();

    assert_eq!(ledger.submissions(), 4);
    assert_eq!(created.signatures.len(), 4);
    assert_eq!(store.token_count(), 1);

    let tokens = store.tokens.lock().unwrap();
    let record = &tokens[0];
    assert_eq!(record.creator_wallet_address, wallet);
    assert_eq!(record.symbol, "DOGE");
    assert_eq!(record.token_mint_address, created.mint_address);
    assert_eq!(record.metadata_url.as_deref(), Some("https://ipfs.io/ipfs/QmMeta"));
}

#[tokio::test]
async fn no_wallet_session_fails_before_any_work() {
    let store = Arc::new(MemoryStore::new());
    let ledger = Arc::new(MockLedger::new(1_000_000_000));

    let err = issuer(store.clone(), ledger.clone())
        .create_meme_coin(None, &form())
        .await
        .unwrap_err();

    assert!(matches!(err, IssuanceError::WalletNotConnected));
    assert_eq!(ledger.submissions(), 0);
    assert_eq!(store.token_count(), 0);
}

#[tokio::test]
async fn undersized_supply_fails_before_any_ledger_traffic() {
    let store = Arc::new(MemoryStore::new());
    let ledger = Arc::new(MockLedger::new(1_000_000_000));
    let session = WalletSession::new(Keypair::new());

    let mut bad = form();
    bad.initial_supply = 500_000;
    let err = issuer(store.clone(), ledger.clone())
        .create_meme_coin(Some(&session), &bad)
        .await
        .unwrap_err();

    assert!(matches!(err, IssuanceError::InvalidRequest(_)));
    assert_eq!(ledger.submissions(), 0);
    assert_eq!(store.token_count(), 0);
}

#[tokio::test]
async fn metadata_upload_failure_aborts_before_any_minting() {
    let store = Arc::new(MemoryStore::new());
    let ledger = Arc::new(MockLedger::new(1_000_000_000));
    let session = WalletSession::new(Keypair::new());

    let err = issuer_with_uploader(store.clone(), ledger.clone(), Arc::new(FailingUploader))
        .create_meme_coin(Some(&session), &form())
        .await
        .unwrap_err();

    assert!(matches!(err, IssuanceError::MetadataUploadFailed(_)));
    assert_eq!(ledger.submissions(), 0);
    assert_eq!(store.token_count(), 0);
}

#[tokio::test]
async fn record_write_failure_surfaces_after_the_mint_completed() {
    let store = Arc::new(MemoryStore::new());
    store
        .fail_token_writes
        .store(true, std::sync::atomic::Ordering::SeqCst);
    let ledger = Arc::new(MockLedger::new(1_000_000_000));
    let session = WalletSession::new(Keypair::new());

    let err = issuer(store.clone(), ledger.clone())
        .create_meme_coin(Some(&session), &form())
        .await
        .unwrap_err();

    assert!(matches!(err, IssuanceError::StoreWriteFailed(_)));
    // All four on-chain operations confirmed; only the record is missing
    assert_eq!(ledger.submissions(), 4);
    assert_eq!(store.token_count(), 0);
}

#[tokio::test]
async fn mid_sequence_failure_records_nothing() {
    let store = Arc::new(MemoryStore::new());
    let ledger = Arc::new(MockLedger::failing_at(1_000_000_000, 3));
    let session = WalletSession::new(Keypair::new());

    let err = issuer(store.clone(), ledger.clone())
        .create_meme_coin(Some(&session), &form())
        .await
        .unwrap_err();

    assert!(matches!(err, IssuanceError::Ledger(_)));
    // The first two operations confirmed and stay on the ledger
    assert_eq!(ledger.submissions(), 2);
    // But the token is never recorded
    assert_eq!(store.token_count(), 0);
}

#[tokio::test]
async fn low_balance_is_topped_up_before_minting() {
    let store = Arc::new(MemoryStore::new());
    let ledger = Arc::new(MockLedger::new(10_000_000));
    let session = WalletSession::new(Keypair::new());

    issuer(store.clone(), ledger.clone())
        .create_meme_coin(Some(&session), &form())
        .await
        .unwrap();

    assert!(*ledger.balance.lock().unwrap() >= launchpad_types::MIN_OPERATING_LAMPORTS);
    assert_eq!(store.token_count(), 1);
}

#[tokio::test]
async fn creator_youtube_is_resolved_from_the_store() {
    let store = Arc::new(MemoryStore::new());
    let ledger = Arc::new(MockLedger::new(1_000_000_000));
    let session = WalletSession::new(Keypair::new());
    let wallet = session.pubkey().to_string();

    let mut record = launchpad_types::CreatorRecord::new(wallet.clone());
    record.youtube_username = Some("gamer".to_string());
    store.creators.lock().unwrap().insert(wallet, record);

    // Lookup succeeds; issuance proceeds regardless of its outcome
    issuer(store.clone(), ledger.clone())
        .create_meme_coin(Some(&session), &form())
        .await
        .unwrap();
    assert_eq!(store.token_count(), 1);
}

#[tokio::test]
async fn retry_after_failure_mints_a_different_token() {
    let store = Arc::new(MemoryStore::new());
    let session = WalletSession::new(Keypair::new());

    let failing = Arc::new(MockLedger::failing_at(1_000_000_000, 1));
    issuer(store.clone(), failing)
        .create_meme_coin(Some(&session), &form())
        .await
        .unwrap_err();

    let working = Arc::new(MockLedger::new(1_000_000_000));
    let first = issuer(store.clone(), working.clone())
        .create_meme_coin(Some(&session), &form())
        .await
        .unwrap();
    let second = issuer(store.clone(), working)
        .create_meme_coin(Some(&session), &form())
        .await
        .unwrap();

    assert_ne!(first.mint_address, second.mint_address);
    assert_eq!(store.token_count(), 2);
}

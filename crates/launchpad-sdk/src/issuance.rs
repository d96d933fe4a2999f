//! Sequential on-chain mint issuance
//!
//! The four operations have strict data dependencies: the mint account must
//! exist before it can be initialized, the mint must be initialized before
//! an associated account can reference it, and the associated account must
//! exist before supply can be minted into it. Each transaction is submitted
//! and confirmed before the next one is built. A failure aborts the rest of
//! the sequence; effects already confirmed stay on the ledger.

use crate::airdrop;
use crate::client::LedgerClient;
use crate::config::Cluster;
use crate::errors::{SdkError, SdkResult};
use crate::instructions;
use crate::session::WalletSession;
use launchpad_types::TOKEN_DECIMALS;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::{info, warn};

/// Result of a completed issuance
#[derive(Debug)]
pub struct TokenIssuance {
    /// The new token's mint address
    pub mint: Pubkey,
    /// The creator's associated token account holding the initial supply
    pub token_account: Pubkey,
    /// Confirmation signatures of the four operations, in submit order
    pub signatures: Vec<Signature>,
}

/// Create a new mint, its associated token account, and mint the initial
/// supply to the session wallet.
///
/// A fresh mint keypair is generated per call: retrying a failed issuance
/// mints a new token, it never resumes the previous attempt.
pub async fn create_token(
    ledger: &dyn LedgerClient,
    session: &WalletSession,
    initial_supply: u64,
) -> SdkResult<TokenIssuance> {
    let payer = session.pubkey();
    let mint = Keypair::new();
    let mint_address = mint.pubkey();

    let base_units = initial_supply
        .checked_mul(10u64.pow(TOKEN_DECIMALS as u32))
        .ok_or(SdkError::AmountOverflow)?;
    let rent_lamports = ledger
        .minimum_rent_exempt_balance(instructions::mint_account_len())
        .await?;
    let token_account = instructions::associated_token_address(&payer, &mint_address);

    info!(%mint_address, initial_supply, "starting mint issuance");
    let mut signatures = Vec::with_capacity(4);

    // (a) fund the mint account; co-signed by the mint keypair
    let ix = instructions::create_mint_account(&payer, &mint_address, rent_lamports);
    signatures.push(submit(ledger, session, &[ix], &[&mint]).await?);

    // (b) initialize the mint, wallet as mint and freeze authority
    let ix = instructions::initialize_mint(&mint_address, &payer, TOKEN_DECIMALS)?;
    signatures.push(submit(ledger, session, &[ix], &[]).await?);

    // (c) create the wallet's associated token account
    let ix = instructions::create_token_account(&payer, &payer, &mint_address);
    signatures.push(submit(ledger, session, &[ix], &[]).await?);

    // (d) mint the initial supply into it
    let ix = instructions::mint_initial_supply(&mint_address, &token_account, &payer, base_units)?;
    signatures.push(submit(ledger, session, &[ix], &[]).await?);

    info!(%mint_address, "mint issuance confirmed");
    Ok(TokenIssuance {
        mint: mint_address,
        token_account,
        signatures,
    })
}

/// Check the wallet balance and attempt one faucet top-up when it is below
/// `min_lamports`. Returns the final balance.
pub async fn ensure_operating_balance(
    ledger: &dyn LedgerClient,
    cluster: Cluster,
    owner: &Pubkey,
    min_lamports: u64,
) -> SdkResult<u64> {
    let balance = ledger.balance(owner).await?;
    if balance >= min_lamports {
        return Ok(balance);
    }

    if !cluster.airdrops_enabled() {
        warn!(%owner, balance, min_lamports, "balance too low and no faucet on this cluster");
        return Err(SdkError::InsufficientBalance);
    }

    if let Err(e) = airdrop::request_airdrop(ledger, cluster, owner).await {
        warn!(%owner, error = %e, "faucet top-up failed");
        return Err(SdkError::InsufficientBalance);
    }
    ledger.balance(owner).await
}

async fn submit(
    ledger: &dyn LedgerClient,
    session: &WalletSession,
    instructions: &[Instruction],
    extra_signers: &[&Keypair],
) -> SdkResult<Signature> {
    let recent_blockhash = ledger.latest_blockhash().await?;
    let transaction = session.sign_transaction(instructions, extra_signers, recent_blockhash);
    ledger.send_and_confirm(&transaction).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use solana_sdk::hash::Hash;
    use solana_sdk::transaction::Transaction;
    use std::sync::Mutex;

    /// Ledger double that records submitted transactions and can be told to
    /// fail the Nth submission
    struct MockLedger {
        balance: Mutex<u64>,
        submitted: Mutex<Vec<Transaction>>,
        fail_at_submission: Option<usize>,
        airdrop_works: bool,
    }

    impl MockLedger {
        fn new(balance: u64) -> Self {
            Self {
                balance: Mutex::new(balance),
                submitted: Mutex::new(Vec::new()),
                fail_at_submission: None,
                airdrop_works: true,
            }
        }

        fn failing_at(balance: u64, n: usize) -> Self {
            Self {
                fail_at_submission: Some(n),
                ..Self::new(balance)
            }
        }

        fn submissions(&self) -> usize {
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
            if !self.airdrop_works {
                return Err(SdkError::RpcError("faucet dry".into()));
            }
            *self.balance.lock().unwrap() += lamports;
            Ok(Signature::default())
        }

        async fn confirm(&self, _signature: &Signature) -> SdkResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn issuance_submits_four_sequential_transactions() {
        let ledger = MockLedger::new(1_000_000_000);
        let session = WalletSession::new(Keypair::new());

        let issuance = create_token(&ledger, &session, 1_000_000).await.unwrap();
        assert_eq!(issuance.signatures.len(), 4);
        assert_eq!(ledger.submissions(), 4);

        let submitted = ledger.submitted.lock().unwrap();
        // Only the create-account transaction carries the mint co-signature
        assert_eq!(submitted[0].signatures.len(), 2);
        for tx in submitted.iter().skip(1) {
            assert_eq!(tx.signatures.len(), 1);
        }
    }

    #[tokio::test]
    async fn failure_mid_sequence_keeps_earlier_effects() {
        let ledger = MockLedger::failing_at(1_000_000_000, 3);
        let session = WalletSession::new(Keypair::new());

        let err = create_token(&ledger, &session, 1_000_000).await.unwrap_err();
        assert!(matches!(err, SdkError::TransactionFailed(_)));
        // The first two operations went through and are not rolled back
        assert_eq!(ledger.submissions(), 2);
    }

    #[tokio::test]
    async fn fresh_mint_per_attempt() {
        let ledger = MockLedger::new(1_000_000_000);
        let session = WalletSession::new(Keypair::new());

        let first = create_token(&ledger, &session, 1_000_000).await.unwrap();
        let second = create_token(&ledger, &session, 1_000_000).await.unwrap();
        assert_ne!(first.mint, second.mint);
    }

    #[tokio::test]
    async fn supply_overflow_is_rejected_before_submission() {
        let ledger = MockLedger::new(1_000_000_000);
        let session = WalletSession::new(Keypair::new());

        let err = create_token(&ledger, &session, u64::MAX).await.unwrap_err();
        assert!(matches!(err, SdkError::AmountOverflow));
        assert_eq!(ledger.submissions(), 0);
    }

    #[tokio::test]
    async fn low_balance_tops_up_from_faucet() {
        let ledger = MockLedger::new(10_000_000);
        let owner = Keypair::new().pubkey();

        let balance = ensure_operating_balance(&ledger, Cluster::Devnet, &owner, 50_000_000)
            .await
            .unwrap();
        assert!(balance >= 50_000_000);
    }

    #[tokio::test]
    async fn low_balance_on_mainnet_fails_without_airdrop() {
        let ledger = MockLedger::new(10_000_000);
        let owner = Keypair::new().pubkey();

        let err = ensure_operating_balance(&ledger, Cluster::MainnetBeta, &owner, 50_000_000)
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InsufficientBalance));
    }

    #[tokio::test]
    async fn failed_faucet_surfaces_insufficient_balance() {
        let mut ledger = MockLedger::new(10_000_000);
        ledger.airdrop_works = false;
        let owner = Keypair::new().pubkey();

        let err = ensure_operating_balance(&ledger, Cluster::Devnet, &owner, 50_000_000)
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InsufficientBalance));
    }

    #[tokio::test]
    async fn airdrop_fails_fast_on_mainnet() {
        let ledger = MockLedger::new(0);
        let owner = Keypair::new().pubkey();

        let err = airdrop::request_airdrop(&ledger, Cluster::MainnetBeta, &owner)
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::UnsupportedOnMainnet));
    }
}

//! Ledger client trait and RPC implementation

use crate::errors::{SdkError, SdkResult};
use async_trait::async_trait;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction, transaction::TransactionError,
};

/// The RPC surface the launchpad needs from a Solana cluster.
///
/// All operations suspend on the caller's event loop; nothing blocks.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn balance(&self, owner: &Pubkey) -> SdkResult<u64>;

    /// Minimum balance keeping an account of `data_len` bytes rent-exempt
    async fn minimum_rent_exempt_balance(&self, data_len: usize) -> SdkResult<u64>;

    async fn latest_blockhash(&self) -> SdkResult<Hash>;

    /// Submit a signed transaction and await its confirmation
    async fn send_and_confirm(&self, transaction: &Transaction) -> SdkResult<Signature>;

    async fn request_airdrop(&self, owner: &Pubkey, lamports: u64) -> SdkResult<Signature>;

    /// Await confirmation of an already submitted signature
    async fn confirm(&self, signature: &Signature) -> SdkResult<()>;
}

/// `LedgerClient` over the nonblocking Solana RPC client
pub struct RpcLedgerClient {
    rpc: RpcClient,
}

impl RpcLedgerClient {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        let rpc = RpcClient::new_with_commitment(rpc_url.into(), CommitmentConfig::confirmed());
        Self { rpc }
    }

    pub fn url(&self) -> String {
        self.rpc.url()
    }
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn balance(&self, owner: &Pubkey) -> SdkResult<u64> {
        self.rpc.get_balance(owner).await.map_err(classify)
    }

    async fn minimum_rent_exempt_balance(&self, data_len: usize) -> SdkResult<u64> {
        self.rpc
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(classify)
    }

    async fn latest_blockhash(&self) -> SdkResult<Hash> {
        self.rpc.get_latest_blockhash().await.map_err(classify)
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> SdkResult<Signature> {
        self.rpc
            .send_and_confirm_transaction(transaction)
            .await
            .map_err(classify)
    }

    async fn request_airdrop(&self, owner: &Pubkey, lamports: u64) -> SdkResult<Signature> {
        self.rpc
            .request_airdrop(owner, lamports)
            .await
            .map_err(classify)
    }

    async fn confirm(&self, signature: &Signature) -> SdkResult<()> {
        self.rpc
            .confirm_transaction(signature)
            .await
            .map_err(classify)?;
        Ok(())
    }
}

/// Classify an RPC failure into a tagged error at the point it occurs
fn classify(err: ClientError) -> SdkError {
    if let Some(tx_err) = err.get_transaction_error() {
        return match tx_err {
            TransactionError::InsufficientFundsForFee
            | TransactionError::InsufficientFundsForRent { .. } => SdkError::InsufficientFunds,
            other => SdkError::TransactionFailed(other.to_string()),
        };
    }
    match err.kind() {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => {
            SdkError::RpcUnavailable(err.to_string())
        }
        ClientErrorKind::SigningError(_) => SdkError::WalletRejected(err.to_string()),
        _ => SdkError::RpcError(err.to_string()),
    }
}

//! Error types for the SDK
//!
//! Ledger failures are classified into tagged variants at the RPC boundary,
//! so callers match on variants instead of pattern-matching error text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("insufficient funds to cover fees and rent")]
    InsufficientFunds,

    #[error("wallet refused to sign: {0}")]
    WalletRejected(String),

    #[error("RPC endpoint unavailable: {0}")]
    RpcUnavailable(String),

    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("failed to build instruction: {0}")]
    InstructionBuild(String),

    #[error("initial supply overflows the mint's decimal precision")]
    AmountOverflow,

    #[error("airdrops are not available on mainnet")]
    UnsupportedOnMainnet,

    #[error("airdrop failed: {0}")]
    AirdropFailed(String),

    #[error("wallet balance below the operating minimum and top-up failed")]
    InsufficientBalance,

    #[error("invalid keypair: {0}")]
    InvalidKeypair(String),
}

pub type SdkResult<T> = std::result::Result<T, SdkError>;

//! Launchpad SDK
//!
//! Solana client layer for the creator launchpad. Provides:
//! - A `LedgerClient` trait over the RPC surface the launchpad needs,
//!   with a nonblocking RPC implementation
//! - An explicit `WalletSession` carrying the signing identity
//! - SPL-token instruction builders
//! - The sequential four-step mint issuance
//! - The devnet airdrop assist

pub mod airdrop;
pub mod client;
pub mod config;
pub mod errors;
pub mod instructions;
pub mod issuance;
pub mod session;

pub use airdrop::*;
pub use client::*;
pub use config::*;
pub use errors::*;
pub use issuance::*;
pub use session::*;

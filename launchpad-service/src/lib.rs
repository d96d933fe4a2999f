//! Creator launchpad service
//!
//! HTTP backend for creator verification and meme-coin issuance: OAuth
//! callbacks that verify a creator's audience, a Postgres record store, and
//! an issuance pipeline that mints SPL tokens against a Solana cluster.

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod ipfs;
pub mod issuance;
pub mod oauth;

// Re-export commonly used types
pub use api::ApiState;
pub use config::ServiceConfig;
pub use database::{CreatorStore, PostgresStore, RecordStore, TokenStore};
pub use issuance::{CreatedToken, Issuer};

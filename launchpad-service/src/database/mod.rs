//! Record stores for creators and minted tokens

pub mod postgres;

pub use postgres::PostgresStore;

use anyhow::Result;
use async_trait::async_trait;
use launchpad_types::{CreatorRecord, TokenRecord};

/// Durable per-wallet creator records.
///
/// Reads are tolerant of "not found" (`Ok(None)`); any other failure is an
/// error. Concurrent writers for the same wallet race last-write-wins; the
/// stores specify no locking discipline.
#[async_trait]
pub trait CreatorStore: Send + Sync {
    async fn get_creator(&self, wallet_address: &str) -> Result<Option<CreatorRecord>>;

    async fn insert_creator(&self, record: &CreatorRecord) -> Result<()>;

    async fn update_creator(&self, record: &CreatorRecord) -> Result<()>;

    /// Linked video-platform username, for token metadata display
    async fn youtube_username(&self, wallet_address: &str) -> Result<Option<String>>;
}

/// Insert-only ledger of minted tokens
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn insert_token(&self, record: &TokenRecord) -> Result<()>;

    async fn get_token(&self, mint_address: &str) -> Result<Option<TokenRecord>>;

    async fn list_tokens_by_creator(&self, wallet_address: &str) -> Result<Vec<TokenRecord>>;

    async fn list_recent_tokens(&self, limit: i64) -> Result<Vec<TokenRecord>>;
}

/// Both stores behind one handle
pub trait RecordStore: CreatorStore + TokenStore {}

impl<T: CreatorStore + TokenStore> RecordStore for T {}

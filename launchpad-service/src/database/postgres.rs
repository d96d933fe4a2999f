//! PostgreSQL record store

use super::{CreatorStore, TokenStore};
use crate::config::DatabaseConfig;
use anyhow::Result;
use async_trait::async_trait;
use launchpad_types::{CreatorRecord, TokenRecord};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use std::time::Duration;

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.postgres_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CreatorStore for PostgresStore {
    async fn get_creator(&self, wallet_address: &str) -> Result<Option<CreatorRecord>> {
        let row = sqlx::query("SELECT * FROM creators WHERE wallet_address = $1")
            .bind(wallet_address)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_creator(&r)).transpose()
    }

    async fn insert_creator(&self, record: &CreatorRecord) -> Result<()> {
        let query = r#"
            INSERT INTO creators (
                id, created_at, wallet_address,
                youtube_id, youtube_username, youtube_profile_image,
                youtube_subscribers, youtube_verified,
                twitch_id, twitch_username, twitch_profile_image,
                twitch_followers, twitch_verified,
                verified, verified_by
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15
            )
        "#;

        sqlx::query(query)
            .bind(record.id)
            .bind(record.created_at)
            .bind(&record.wallet_address)
            .bind(&record.youtube_id)
            .bind(&record.youtube_username)
            .bind(&record.youtube_profile_image)
            .bind(record.youtube_subscribers)
            .bind(record.youtube_verified)
            .bind(&record.twitch_id)
            .bind(&record.twitch_username)
            .bind(&record.twitch_profile_image)
            .bind(record.twitch_followers)
            .bind(record.twitch_verified)
            .bind(record.verified)
            .bind(&record.verified_by)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_creator(&self, record: &CreatorRecord) -> Result<()> {
        let query = r#"
            UPDATE creators SET
                youtube_id = $2,
                youtube_username = $3,
                youtube_profile_image = $4,
                youtube_subscribers = $5,
                youtube_verified = $6,
                twitch_id = $7,
                twitch_username = $8,
                twitch_profile_image = $9,
                twitch_followers = $10,
                twitch_verified = $11,
                verified = $12,
                verified_by = $13
            WHERE wallet_address = $1
        "#;

        sqlx::query(query)
            .bind(&record.wallet_address)
            .bind(&record.youtube_id)
            .bind(&record.youtube_username)
            .bind(&record.youtube_profile_image)
            .bind(record.youtube_subscribers)
            .bind(record.youtube_verified)
            .bind(&record.twitch_id)
            .bind(&record.twitch_username)
            .bind(&record.twitch_profile_image)
            .bind(record.twitch_followers)
            .bind(record.twitch_verified)
            .bind(record.verified)
            .bind(&record.verified_by)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn youtube_username(&self, wallet_address: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT youtube_username FROM creators WHERE wallet_address = $1")
            .bind(wallet_address)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(r.try_get::<Option<String>, _>("youtube_username")?),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TokenStore for PostgresStore {
    async fn insert_token(&self, record: &TokenRecord) -> Result<()> {
        let query = r#"
            INSERT INTO meme_coins (
                id, created_at, creator_wallet_address, name, symbol, description,
                initial_supply, starting_price, price_unit, token_mint_address,
                image_url, metadata_url
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12
            )
        "#;

        sqlx::query(query)
            .bind(record.id)
            .bind(record.created_at)
            .bind(&record.creator_wallet_address)
            .bind(&record.name)
            .bind(&record.symbol)
            .bind(&record.description)
            .bind(record.initial_supply)
            .bind(record.starting_price)
            .bind(&record.price_unit)
            .bind(&record.token_mint_address)
            .bind(&record.image_url)
            .bind(&record.metadata_url)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_token(&self, mint_address: &str) -> Result<Option<TokenRecord>> {
        let row = sqlx::query("SELECT * FROM meme_coins WHERE token_mint_address = $1")
            .bind(mint_address)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_token(&r)).transpose()
    }

    async fn list_tokens_by_creator(&self, wallet_address: &str) -> Result<Vec<TokenRecord>> {
        let rows = sqlx::query(
            "SELECT * FROM meme_coins WHERE creator_wallet_address = $1 ORDER BY created_at DESC",
        )
        .bind(wallet_address)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_token).collect()
    }

    async fn list_recent_tokens(&self, limit: i64) -> Result<Vec<TokenRecord>> {
        let rows = sqlx::query("SELECT * FROM meme_coins ORDER BY created_at DESC LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_token).collect()
    }
}

fn row_to_creator(row: &PgRow) -> Result<CreatorRecord> {
    Ok(CreatorRecord {
        id: row.try_get("id")?,
        created_at: row.try_get("created_at")?,
        wallet_address: row.try_get("wallet_address")?,
        youtube_id: row.try_get("youtube_id")?,
        youtube_username: row.try_get("youtube_username")?,
        youtube_profile_image: row.try_get("youtube_profile_image")?,
        youtube_subscribers: row.try_get("youtube_subscribers")?,
        youtube_verified: row.try_get("youtube_verified")?,
        twitch_id: row.try_get("twitch_id")?,
        twitch_username: row.try_get("twitch_username")?,
        twitch_profile_image: row.try_get("twitch_profile_image")?,
        twitch_followers: row.try_get("twitch_followers")?,
        twitch_verified: row.try_get("twitch_verified")?,
        verified: row.try_get("verified")?,
        verified_by: row.try_get("verified_by")?,
    })
}

fn row_to_token(row: &PgRow) -> Result<TokenRecord> {
    Ok(TokenRecord {
        id: row.try_get("id")?,
        created_at: row.try_get("created_at")?,
        creator_wallet_address: row.try_get("creator_wallet_address")?,
        name: row.try_get("name")?,
        symbol: row.try_get("symbol")?,
        description: row.try_get("description")?,
        initial_supply: row.try_get("initial_supply")?,
        starting_price: row.try_get("starting_price")?,
        price_unit: row.try_get("price_unit")?,
        token_mint_address: row.try_get("token_mint_address")?,
        image_url: row.try_get("image_url")?,
        metadata_url: row.try_get("metadata_url")?,
    })
}

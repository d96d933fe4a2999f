//! Token records and creation-request validation

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_SYMBOL_LEN, MIN_INITIAL_SUPPLY};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unit the starting price is quoted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceUnit {
    #[serde(rename = "SOL")]
    Sol,
    #[serde(rename = "USD")]
    Usd,
}

impl PriceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::Sol => "SOL",
            PriceUnit::Usd => "USD",
        }
    }
}

impl fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceUnit {
    type Err = TokenFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SOL" => Ok(PriceUnit::Sol),
            "USD" => Ok(PriceUnit::Usd),
            other => Err(TokenFormError::UnknownPriceUnit(other.to_string())),
        }
    }
}

/// Validation failures for a token-creation request.
///
/// All of these are user-correctable and must be raised before any ledger
/// traffic happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenFormError {
    #[error("token name must not be empty")]
    EmptyName,
    #[error("token symbol must not be empty")]
    EmptySymbol,
    #[error("initial supply must be at least {min}, got {got}")]
    SupplyTooLow { min: u64, got: u64 },
    #[error("description must be at most {max} characters, got {got}")]
    DescriptionTooLong { max: usize, got: usize },
    #[error("starting price must be positive")]
    NonPositivePrice,
    #[error("unknown price unit: {0}")]
    UnknownPriceUnit(String),
}

/// Validated input for creating a new meme coin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenForm {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    pub initial_supply: u64,
    pub starting_price: Decimal,
    pub price_unit: PriceUnit,
    /// Display image already pinned to content storage, if any
    #[serde(default)]
    pub image_url: Option<String>,
    /// Linked video-platform username; resolved from the creator record
    /// when absent
    #[serde(default)]
    pub creator_youtube: Option<String>,
}

impl TokenForm {
    /// Symbol as stored: uppercased, truncated to the first
    /// [`MAX_SYMBOL_LEN`] characters
    pub fn normalized_symbol(&self) -> String {
        self.symbol
            .trim()
            .to_uppercase()
            .chars()
            .take(MAX_SYMBOL_LEN)
            .collect()
    }

    pub fn validate(&self) -> Result<(), TokenFormError> {
        if self.name.trim().is_empty() {
            return Err(TokenFormError::EmptyName);
        }
        if self.normalized_symbol().is_empty() {
            return Err(TokenFormError::EmptySymbol);
        }
        if self.initial_supply < MIN_INITIAL_SUPPLY {
            return Err(TokenFormError::SupplyTooLow {
                min: MIN_INITIAL_SUPPLY,
                got: self.initial_supply,
            });
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(TokenFormError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LEN,
                got: self.description.chars().count(),
            });
        }
        if self.starting_price <= Decimal::ZERO {
            return Err(TokenFormError::NonPositivePrice);
        }
        Ok(())
    }
}

/// Persistent record of a minted meme coin.
///
/// Written exactly once, after every on-chain step of the issuance
/// succeeded; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub creator_wallet_address: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub initial_supply: i64,
    pub starting_price: Decimal,
    pub price_unit: String,
    pub token_mint_address: String,
    pub image_url: Option<String>,
    pub metadata_url: Option<String>,
}

impl TokenRecord {
    /// Record for a successfully minted token
    pub fn from_form(
        form: &TokenForm,
        creator_wallet_address: impl Into<String>,
        token_mint_address: impl Into<String>,
        image_url: impl Into<String>,
        metadata_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            creator_wallet_address: creator_wallet_address.into(),
            name: form.name.trim().to_string(),
            symbol: form.normalized_symbol(),
            description: form.description.clone(),
            initial_supply: form.initial_supply as i64,
            starting_price: form.starting_price,
            price_unit: form.price_unit.as_str().to_string(),
            token_mint_address: token_mint_address.into(),
            image_url: Some(image_url.into()),
            metadata_url: Some(metadata_url.into()),
        }
    }
}

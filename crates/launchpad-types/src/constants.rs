//! Constants used across the launchpad components

// ============================================================================
// Verification Thresholds
// ============================================================================

/// Subscriber count at which a YouTube channel earns the verified badge
pub const YOUTUBE_SUBSCRIBER_THRESHOLD: u64 = 1_000;

/// Follower count at which a Twitch channel earns the verified badge
pub const TWITCH_FOLLOWER_THRESHOLD: u64 = 500;

/// Count at which a linked account makes the wallet dashboard-eligible.
/// Linking is enough; the verified badge is gated separately by the
/// per-provider thresholds above.
pub const ELIGIBILITY_THRESHOLD: u64 = 0;

// ============================================================================
// Token Constraints
// ============================================================================

/// Minimum initial supply accepted for a new token
pub const MIN_INITIAL_SUPPLY: u64 = 1_000_000;

/// Maximum length of a token symbol after normalization
pub const MAX_SYMBOL_LEN: usize = 5;

/// Maximum length of a token description
pub const MAX_DESCRIPTION_LEN: usize = 300;

/// Decimal precision used for every mint the launchpad creates
pub const TOKEN_DECIMALS: u8 = 9;

// ============================================================================
// Balance Management
// ============================================================================

/// Minimum wallet balance (lamports) required before starting issuance,
/// 0.05 SOL
pub const MIN_OPERATING_LAMPORTS: u64 = 50_000_000;

/// Amount (lamports) requested from the faucet per top-up, 1 SOL
pub const AIRDROP_LAMPORTS: u64 = 1_000_000_000;

// ============================================================================
// Content Storage
// ============================================================================

/// Image URL substituted when no image was uploaded for a token
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://ipfs.io/ipfs/bafkreiabag3ztnhe5pg7js4bj6sxuvkz3sdf5qpekhoejb5xtu335uwv5a";

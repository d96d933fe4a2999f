//! Shared types for the creator launchpad
//!
//! This crate provides the domain types, constants, and the pure
//! verification evaluator that are used across the SDK and the service.

pub mod constants;
pub mod creator;
pub mod token;
pub mod verification;

// Re-export all public types
pub use constants::*;
pub use creator::*;
pub use token::*;
pub use verification::*;

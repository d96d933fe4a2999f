//! Explicit wallet session
//!
//! The signing identity is passed by reference into every operation that
//! needs it; there is no ambient wallet context.

use crate::errors::{SdkError, SdkResult};
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
    signer::Signer,
    transaction::Transaction,
};
use std::path::Path;

/// A connected wallet: public identity plus signing capability
pub struct WalletSession {
    keypair: Keypair,
}

impl WalletSession {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Load a session from a Solana JSON keypair file
    pub fn from_file(path: impl AsRef<Path>) -> SdkResult<Self> {
        let keypair = read_keypair_file(path.as_ref())
            .map_err(|e| SdkError::InvalidKeypair(e.to_string()))?;
        Ok(Self { keypair })
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Build and sign a transaction with this wallet as fee payer.
    ///
    /// `extra_signers` covers accounts that must co-sign, e.g. a freshly
    /// generated mint keypair for its create-account instruction.
    pub fn sign_transaction(
        &self,
        instructions: &[Instruction],
        extra_signers: &[&Keypair],
        recent_blockhash: Hash,
    ) -> Transaction {
        let mut signers: Vec<&dyn Signer> = vec![&self.keypair];
        for keypair in extra_signers {
            signers.push(*keypair as &dyn Signer);
        }
        Transaction::new_signed_with_payer(
            instructions,
            Some(&self.keypair.pubkey()),
            &signers,
            recent_blockhash,
        )
    }
}

impl std::fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSession")
            .field("pubkey", &self.pubkey())
            .finish()
    }
}

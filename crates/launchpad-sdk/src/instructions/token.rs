//! SPL-token instruction builders for the mint issuance sequence

use crate::errors::{SdkError, SdkResult};
use solana_sdk::program_pack::Pack;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_instruction};
use spl_token::state::Mint;

/// Build the instruction funding a fresh mint account with the rent-exempt
/// minimum and assigning it to the token program. The mint keypair must
/// co-sign the enclosing transaction.
pub fn create_mint_account(payer: &Pubkey, mint: &Pubkey, rent_lamports: u64) -> Instruction {
    system_instruction::create_account(
        payer,
        mint,
        rent_lamports,
        Mint::LEN as u64,
        &spl_token::id(),
    )
}

/// Build the instruction initializing the mint, with `authority` as both
/// mint and freeze authority
pub fn initialize_mint(mint: &Pubkey, authority: &Pubkey, decimals: u8) -> SdkResult<Instruction> {
    spl_token::instruction::initialize_mint(
        &spl_token::id(),
        mint,
        authority,
        Some(authority),
        decimals,
    )
    .map_err(|e| SdkError::InstructionBuild(e.to_string()))
}

/// Build the instruction creating `owner`'s associated token account for
/// `mint`, funded by `payer`
pub fn create_token_account(payer: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> Instruction {
    spl_associated_token_account::instruction::create_associated_token_account(
        payer,
        owner,
        mint,
        &spl_token::id(),
    )
}

/// Build the instruction minting `amount` base units into `token_account`
pub fn mint_initial_supply(
    mint: &Pubkey,
    token_account: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> SdkResult<Instruction> {
    spl_token::instruction::mint_to(&spl_token::id(), mint, token_account, authority, &[], amount)
        .map_err(|e| SdkError::InstructionBuild(e.to_string()))
}

/// The associated token account address for `owner` and `mint`
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(owner, mint)
}

/// Size of a mint account, for rent-exemption queries
pub fn mint_account_len() -> usize {
    Mint::LEN
}

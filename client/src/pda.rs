//! Address derivation for roster user state accounts.

use anyhow::Context;
use roster_interface::USER_STATE_SEED;
use solana_sdk::pubkey::Pubkey;

/// Derives the state account address for `owner` under `program_id`.
///
/// Must reproduce exactly the derivation every other client and the
/// account-creation path perform; the seed is a fixed protocol constant,
/// not a per-user value.
pub fn user_state_address(owner: &Pubkey, program_id: &Pubkey) -> anyhow::Result<Pubkey> {
    Pubkey::create_with_seed(owner, USER_STATE_SEED, program_id)
        .context("Failed to derive the user state address")
}

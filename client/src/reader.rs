//! Read side of the protocol: fetch and decode user state records.

use roster_interface::state::{decode_record, UserState};
use solana_sdk::pubkey::Pubkey;

use crate::{ledger::Ledger, pda::user_state_address};

/// Reads the state stored at `address`. A missing account or an unwritten
/// record reads as the empty default.
pub fn read_user_state<L: Ledger>(ledger: &L, address: &Pubkey) -> anyhow::Result<UserState> {
    Ok(match ledger.account_data(address)? {
        Some(data) => decode_record(&data),
        None => UserState::default(),
    })
}

/// Reads `owner`'s state through their derived address.
pub fn read_own_state<L: Ledger>(
    ledger: &L,
    owner: &Pubkey,
    program_id: &Pubkey,
) -> anyhow::Result<UserState> {
    let address = user_state_address(owner, program_id)?;
    read_user_state(ledger, &address)
}

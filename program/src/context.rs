//! Validated account contexts, one per instruction shape.

use roster_interface::{error::RosterError, USER_STATE_SIZE};
use solana_program::{account_info::AccountInfo, program_error::ProgramError};

/// Accounts for the friend instructions: the signing initiator, their
/// state account, and the target identity.
pub struct FriendContext<'a, 'info> {
    pub initiator: &'a AccountInfo<'info>,
    pub state: &'a AccountInfo<'info>,
    pub target: &'a AccountInfo<'info>,
}

impl<'a, 'info> FriendContext<'a, 'info> {
    pub fn load(accounts: &'a [AccountInfo<'info>]) -> Result<Self, ProgramError> {
        let [initiator, state, target] = accounts else {
            return Err(RosterError::MissingRequiredAccount.into());
        };
        check_initiator(initiator)?;
        check_state_account(state)?;
        Ok(Self {
            initiator,
            state,
            target,
        })
    }
}

/// Accounts for the status instructions: the signing initiator and their
/// state account.
pub struct StatusContext<'a, 'info> {
    pub initiator: &'a AccountInfo<'info>,
    pub state: &'a AccountInfo<'info>,
}

impl<'a, 'info> StatusContext<'a, 'info> {
    pub fn load(accounts: &'a [AccountInfo<'info>]) -> Result<Self, ProgramError> {
        let [initiator, state] = accounts else {
            return Err(RosterError::MissingRequiredAccount.into());
        };
        check_initiator(initiator)?;
        check_state_account(state)?;
        Ok(Self { initiator, state })
    }
}

fn check_initiator(initiator: &AccountInfo) -> Result<(), ProgramError> {
    if !initiator.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

/// State accounts are created client-side with a fixed allocation; any
/// other length means the wrong account was passed.
fn check_state_account(state: &AccountInfo) -> Result<(), ProgramError> {
    if state.data_len() != USER_STATE_SIZE {
        return Err(RosterError::InvalidStateAccountLength.into());
    }
    Ok(())
}

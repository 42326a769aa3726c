use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::instructions::InstructionTag;

/// Adds the target identity to the payer's friend set.
///
/// Re-adding an existing friend is accepted by the program and leaves the
/// set unchanged.
///
/// ### Accounts
///  0. `[SIGNER]` Payer
///  1. `[WRITE]` Payer's derived user state account
///  2. `[READ]` Target identity
pub struct AddFriend {
    /// The account initiating the follow request and paying the fee.
    pub payer: Pubkey,
    /// The payer's derived user state account.
    pub payer_state: Pubkey,
    /// The identity being added.
    pub target: Pubkey,
}

impl AddFriend {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: vec![
                AccountMeta::new_readonly(self.payer, true),
                AccountMeta::new(self.payer_state, false),
                AccountMeta::new_readonly(self.target, false),
            ],
            data: vec![InstructionTag::AddFriend as u8],
        }
    }
}

use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::instructions::InstructionTag;

/// Removes the target identity from the payer's friend set.
///
/// Removing an identity that is not a friend is accepted by the program
/// and leaves the set unchanged.
///
/// ### Accounts
///  0. `[SIGNER]` Payer
///  1. `[WRITE]` Payer's derived user state account
///  2. `[READ]` Target identity
pub struct RemoveFriend {
    /// The account initiating the removal and paying the fee.
    pub payer: Pubkey,
    /// The payer's derived user state account.
    pub payer_state: Pubkey,
    /// The identity being removed.
    pub target: Pubkey,
}

impl RemoveFriend {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: vec![
                AccountMeta::new_readonly(self.payer, true),
                AccountMeta::new(self.payer_state, false),
                AccountMeta::new_readonly(self.target, false),
            ],
            data: vec![InstructionTag::RemoveFriend as u8],
        }
    }
}

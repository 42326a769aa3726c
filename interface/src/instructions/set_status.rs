use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::instructions::InstructionTag;

/// Sets the payer's presence flag.
///
/// The desired value selects the opcode: `SetOnline` for true, `SetOffline`
/// for false. No target account is involved.
///
/// ### Accounts
///  0. `[SIGNER]` Payer
///  1. `[WRITE]` Payer's derived user state account
pub struct SetStatus {
    /// The account whose presence flag changes.
    pub payer: Pubkey,
    /// The payer's derived user state account.
    pub payer_state: Pubkey,
    /// Desired presence.
    pub online: bool,
}

impl SetStatus {
    pub fn instruction(&self) -> Instruction {
        let tag = if self.online {
            InstructionTag::SetOnline
        } else {
            InstructionTag::SetOffline
        };
        Instruction {
            program_id: crate::program::ID,
            accounts: vec![
                AccountMeta::new_readonly(self.payer, true),
                AccountMeta::new(self.payer_state, false),
            ],
            data: vec![tag as u8],
        }
    }
}

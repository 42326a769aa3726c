use roster_interface::{error::RosterError, instructions::InstructionTag};
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult, pubkey::Pubkey,
};

use crate::instructions::{process_add_friend, process_remove_friend, process_set_status};

entrypoint!(process_instruction);

pub fn process_instruction(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let [tag] = instruction_data else {
        return Err(RosterError::InvalidInstructionData.into());
    };

    match InstructionTag::try_from(*tag)? {
        InstructionTag::AddFriend => process_add_friend(accounts),
        InstructionTag::RemoveFriend => process_remove_friend(accounts),
        InstructionTag::SetOnline => process_set_status(accounts, true),
        InstructionTag::SetOffline => process_set_status(accounts, false),
    }
}

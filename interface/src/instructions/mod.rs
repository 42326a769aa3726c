use solana_program::program_error::ProgramError;

use crate::error::RosterError;

pub mod add_friend;
pub mod remove_friend;
pub mod set_status;

pub use {add_friend::AddFriend, remove_friend::RemoveFriend, set_status::SetStatus};

/// Wire opcode of each roster instruction. The instruction data is exactly
/// this one byte; target identities ride in the account list, never in the
/// data buffer.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum InstructionTag {
    AddFriend,
    RemoveFriend,
    SetOnline,
    SetOffline,
}

impl TryFrom<u8> for InstructionTag {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            // SAFETY: A valid enum variant is guaranteed with the match pattern.
            // All variants are checked in the exhaustive instruction tag test.
            0..4 => Ok(unsafe { core::mem::transmute::<u8, Self>(value) }),
            _ => Err(RosterError::InvalidInstructionTag.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::InstructionTag;

    #[test]
    fn test_instruction_tag_from_u8_exhaustive() {
        for variant in InstructionTag::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                InstructionTag::from_repr(variant_u8).unwrap(),
                InstructionTag::try_from(variant_u8).unwrap(),
            );
            assert_eq!(InstructionTag::try_from(variant_u8).unwrap(), variant);
        }
        assert!(InstructionTag::try_from(InstructionTag::iter().count() as u8).is_err());
    }
}

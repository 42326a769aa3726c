use solana_program::program_error::ProgramError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum RosterError {
    InvalidInstructionTag,
    InvalidInstructionData,
    InvalidStateAccountLength,
    MissingRequiredAccount,
    RecordSerialization,
    RecordTooLarge,
}

impl From<RosterError> for ProgramError {
    #[inline(always)]
    fn from(e: RosterError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<RosterError> for &'static str {
    fn from(value: RosterError) -> Self {
        match value {
            RosterError::InvalidInstructionTag => "Invalid instruction tag",
            RosterError::InvalidInstructionData => "Instruction data must be a single opcode byte",
            RosterError::InvalidStateAccountLength => "User state account has the wrong data length",
            RosterError::MissingRequiredAccount => "Not enough accounts passed for this instruction",
            RosterError::RecordSerialization => "User record failed to serialize",
            RosterError::RecordTooLarge => "Encoded user record exceeds the state account size",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for RosterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

#[cfg(not(target_os = "solana"))]
impl std::error::Error for RosterError {}

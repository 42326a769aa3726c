//! Wire contract shared by the roster program and its clients.
//!
//! Defines the instruction opcodes and builders, the length-prefixed user
//! record codec, and the constants both sides must agree on to derive and
//! size state accounts.

pub mod error;
pub mod instructions;
pub mod state;

pub mod program {
    solana_program::declare_id!("93rrAJeUamY5vb2ZMZbAHmfg6akbTtaUkQNgKKwWb1Es");
}

/// Seed string every party uses to derive a user's state account address
/// from their identity. A fixed protocol constant; changing it desyncs
/// clients from the program silently.
pub const USER_STATE_SEED: &str = "INITIALIZE_STATE";

/// Fixed byte size every user state account is allocated with. The program
/// rejects accounts of any other length.
pub const USER_STATE_SIZE: usize = 1_000_000;

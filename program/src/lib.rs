//! On-chain roster program: maintains each signer's friend set and
//! presence flag inside a seeded, fixed-size state account.

mod context;
mod instructions;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;

pub use roster_interface::program::{check_id, id, ID};

//! Test-only ledger that replays the program's state transitions in
//! memory, so the engine's full mutate-then-verify loop runs under plain
//! `cargo test` with no cluster behind it.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use anyhow::Context;
use roster_interface::{
    instructions::InstructionTag,
    state::{decode_record, write_record, UserState},
    USER_STATE_SIZE,
};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
};

use crate::{ledger::Ledger, pda::user_state_address};

/// In-memory stand-in for the ledger: a plain account store plus the same
/// opcode dispatch the on-chain program performs, expressed through the
/// shared `UserState` transitions. Counts submissions so tests can assert
/// that idempotent calls never hit the wire.
#[derive(Default)]
pub struct TestLedger {
    accounts: RefCell<HashMap<Pubkey, Vec<u8>>>,
    submissions: Cell<usize>,
    drop_writes: Cell<bool>,
}

impl TestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transactions submitted so far, whether or not they changed state.
    pub fn submissions(&self) -> usize {
        self.submissions.get()
    }

    /// When set, submissions confirm but their writes are discarded,
    /// simulating a program that accepted the transaction without
    /// producing the effect the caller expected.
    pub fn set_drop_writes(&self, drop_writes: bool) {
        self.drop_writes.set(drop_writes);
    }

    /// Creates a zero-filled state account for `owner` and returns its
    /// address, mirroring the client-side account bootstrap.
    pub fn create_state_account(&self, owner: &Pubkey, program_id: &Pubkey) -> Pubkey {
        let address = user_state_address(owner, program_id).expect("derivation should succeed");
        self.accounts
            .borrow_mut()
            .insert(address, vec![0u8; USER_STATE_SIZE]);
        address
    }

    /// Registers a bare, dataless account: enough of a ledger presence
    /// for target-existence checks to pass.
    pub fn create_system_account(&self, address: &Pubkey) {
        self.accounts.borrow_mut().insert(*address, Vec::new());
    }

    /// Seeds a user's state record directly, bypassing the program path.
    pub fn write_state(&self, owner: &Pubkey, program_id: &Pubkey, state: &UserState) {
        let address = self.create_state_account(owner, program_id);
        let mut accounts = self.accounts.borrow_mut();
        let data = accounts.get_mut(&address).expect("account just created");
        write_record(state, data).expect("record should fit a fresh account");
    }

    fn apply(&self, instruction: &Instruction) -> anyhow::Result<()> {
        let opcode = *instruction
            .data
            .first()
            .context("instruction data is empty")?;
        let tag = InstructionTag::try_from(opcode)
            .map_err(|err| anyhow::anyhow!("invalid opcode {opcode}: {err}"))?;

        let mut accounts = self.accounts.borrow_mut();
        let state_meta = instruction
            .accounts
            .get(1)
            .context("missing state account")?;
        let data = accounts
            .get_mut(&state_meta.pubkey)
            .context("state account does not exist")?;
        let mut state = decode_record(data);

        let changed = match tag {
            InstructionTag::AddFriend | InstructionTag::RemoveFriend => {
                let target = instruction
                    .accounts
                    .get(2)
                    .context("missing target account")?
                    .pubkey
                    .to_string();
                match tag {
                    InstructionTag::AddFriend => state.add_friend(&target),
                    _ => state.remove_friend(&target),
                }
            }
            InstructionTag::SetOnline => state.set_online(true),
            InstructionTag::SetOffline => state.set_online(false),
        };

        if changed && !self.drop_writes.get() {
            write_record(&state, data).map_err(|err| anyhow::anyhow!("{err}"))?;
        }
        Ok(())
    }
}

impl Ledger for TestLedger {
    fn account_data(&self, address: &Pubkey) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.accounts.borrow().get(address).cloned())
    }

    fn submit(&self, _payer: &Keypair, instruction: Instruction) -> anyhow::Result<Signature> {
        self.submissions.set(self.submissions.get() + 1);
        self.apply(&instruction)?;
        Ok(Signature::new_unique())
    }
}

//! The mutation engine: idempotence pre-checks, transaction construction,
//! submission, and post-condition verification for every roster operation,
//! plus the read-side social graph query.

use std::fmt;

use roster_interface::{
    instructions::{AddFriend, RemoveFriend, SetStatus},
    state::UserState,
};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};

use crate::{
    error::SocialError,
    ledger::Ledger,
    logs::{log_info, log_warning},
    pda::user_state_address,
    reader::read_user_state,
};

/// One protocol operation, as issued by the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    AddFriend(Pubkey),
    RemoveFriend(Pubkey),
    SetStatus(bool),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::AddFriend(target) => write!(f, "add-friend({target})"),
            Operation::RemoveFriend(target) => write!(f, "remove-friend({target})"),
            Operation::SetStatus(true) => write!(f, "set-status(online)"),
            Operation::SetStatus(false) => write!(f, "set-status(offline)"),
        }
    }
}

/// What a mutation call did.
#[derive(Debug)]
pub enum MutationOutcome {
    /// A transaction was submitted, confirmed, and its effect verified.
    Submitted(Signature),
    /// The pre-check found the goal already satisfied; nothing was sent.
    AlreadySatisfied,
}

/// Client handle over one payer identity. Holds no state snapshot: every
/// accessor re-reads the ledger, so there is nothing to go stale.
pub struct SocialClient<L> {
    ledger: L,
    payer: Keypair,
    program_id: Pubkey,
}

impl<L: Ledger> SocialClient<L> {
    pub fn new(ledger: L, payer: Keypair, program_id: Pubkey) -> Self {
        Self {
            ledger,
            payer,
            program_id,
        }
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The payer's derived state address. Recomputed on every call, never
    /// stored.
    pub fn state_address(&self) -> anyhow::Result<Pubkey> {
        user_state_address(&self.payer.pubkey(), &self.program_id)
    }

    /// The payer's state as the ledger currently has it.
    pub async fn own_state(&self) -> anyhow::Result<UserState> {
        read_user_state(&self.ledger, &self.state_address()?)
    }

    /// Adds `target` to the payer's friend set.
    ///
    /// Submits nothing when `target` is already a friend; fails with
    /// [`SocialError::TargetNotFound`] when `target` has no ledger account.
    pub async fn add_friend(&self, target: &Pubkey) -> anyhow::Result<MutationOutcome> {
        let key = target.to_string();
        if self.own_state().await?.is_friend(&key) {
            log_info(
                "Add friend",
                format!("{target} is already a friend of {}", self.payer.pubkey()),
            );
            return Ok(MutationOutcome::AlreadySatisfied);
        }
        self.require_target_exists(target)?;

        let instruction = AddFriend {
            payer: self.payer.pubkey(),
            payer_state: self.state_address()?,
            target: *target,
        }
        .instruction();

        self.mutate_and_verify(Operation::AddFriend(*target), instruction, |state| {
            state.is_friend(&key)
        })
        .await
        .map(MutationOutcome::Submitted)
    }

    /// Removes `target` from the payer's friend set.
    ///
    /// Submits nothing when `target` is not a friend; fails with
    /// [`SocialError::TargetNotFound`] when `target` has no ledger account.
    pub async fn remove_friend(&self, target: &Pubkey) -> anyhow::Result<MutationOutcome> {
        let key = target.to_string();
        if !self.own_state().await?.is_friend(&key) {
            log_info(
                "Remove friend",
                format!("{target} is not a friend of {}", self.payer.pubkey()),
            );
            return Ok(MutationOutcome::AlreadySatisfied);
        }
        self.require_target_exists(target)?;

        let instruction = RemoveFriend {
            payer: self.payer.pubkey(),
            payer_state: self.state_address()?,
            target: *target,
        }
        .instruction();

        self.mutate_and_verify(Operation::RemoveFriend(*target), instruction, |state| {
            !state.is_friend(&key)
        })
        .await
        .map(MutationOutcome::Submitted)
    }

    /// Sets the payer's presence flag.
    ///
    /// Status flips are cheap and always submitted, even when the flag
    /// already holds the requested value; the pre-read only informs the
    /// log line, and the post-condition holds either way.
    pub async fn set_status(&self, online: bool) -> anyhow::Result<MutationOutcome> {
        if self.own_state().await?.online == online {
            log_info("Set status", "already in the requested state");
        }

        let instruction = SetStatus {
            payer: self.payer.pubkey(),
            payer_state: self.state_address()?,
            online,
        }
        .instruction();

        self.mutate_and_verify(Operation::SetStatus(online), instruction, |state| {
            state.online == online
        })
        .await
        .map(MutationOutcome::Submitted)
    }

    /// Read-only fan-out over the payer's friend set: every friend whose
    /// own record currently reads as online, in friend-set order. Each
    /// per-friend read is an independent snapshot; the aggregate is a
    /// best-effort view, not a consistent cut.
    pub async fn online_friends(&self) -> anyhow::Result<Vec<Pubkey>> {
        let state = self.own_state().await?;
        let mut online = Vec::new();
        for friend in &state.friends {
            let Ok(identity) = friend.parse::<Pubkey>() else {
                log_warning(
                    "Online friends",
                    format!("skipping malformed friend entry {friend}"),
                );
                continue;
            };
            let address = user_state_address(&identity, &self.program_id)?;
            if read_user_state(&self.ledger, &address)?.online {
                online.push(identity);
            }
        }
        Ok(online)
    }

    /// Shared mutate-then-verify step: submit one instruction, wait for
    /// confirmation, then independently re-read the payer's state and
    /// assert the expected post-condition. Confirmation proves the
    /// transaction executed, not that it had the effect the caller wanted;
    /// the re-read is what closes the loop.
    async fn mutate_and_verify(
        &self,
        operation: Operation,
        instruction: Instruction,
        post_condition: impl Fn(&UserState) -> bool,
    ) -> anyhow::Result<Signature> {
        let actor = self.payer.pubkey();
        let signature =
            self.ledger
                .submit(&self.payer, instruction)
                .map_err(|source| SocialError::SubmissionFailed {
                    actor,
                    operation,
                    source,
                })?;

        let observed = self.own_state().await?;
        if !post_condition(&observed) {
            return Err(SocialError::PostConditionFailed { actor, operation }.into());
        }
        Ok(signature)
    }

    /// Add/remove reference another identity; insist it exists on the
    /// ledger before building a transaction around it.
    fn require_target_exists(&self, target: &Pubkey) -> anyhow::Result<()> {
        if self.ledger.account_data(target)?.is_none() {
            return Err(SocialError::TargetNotFound {
                actor: self.payer.pubkey(),
                target: *target,
            }
            .into());
        }
        Ok(())
    }
}

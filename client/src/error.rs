//! Protocol-level failures surfaced by the mutation engine.

use std::fmt;

use solana_sdk::pubkey::Pubkey;

use crate::engine::Operation;

/// Failures the engine detects itself, as opposed to transport errors
/// bubbling up from the RPC layer untouched. Every variant names the
/// acting identity and the value involved so a desynchronized account can
/// be pinpointed from the error alone. None of these are retried here;
/// retry policy belongs to the caller.
#[derive(Debug)]
pub enum SocialError {
    /// The target identity has no ledger presence. Checked before any
    /// transaction is built.
    TargetNotFound { actor: Pubkey, target: Pubkey },
    /// The transport rejected the transaction or could not confirm it.
    SubmissionFailed {
        actor: Pubkey,
        operation: Operation,
        source: anyhow::Error,
    },
    /// The ledger confirmed the transaction but a fresh read did not
    /// observe the expected effect. Confirmation proves execution, not the
    /// application-level outcome.
    PostConditionFailed { actor: Pubkey, operation: Operation },
}

impl fmt::Display for SocialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocialError::TargetNotFound { actor, target } => write!(
                f,
                "{actor} cannot reference {target}: the target has no ledger account"
            ),
            SocialError::SubmissionFailed {
                actor, operation, ..
            } => write!(f, "{operation} by {actor} failed to submit"),
            SocialError::PostConditionFailed { actor, operation } => write!(
                f,
                "{operation} by {actor} was confirmed but did not take effect"
            ),
        }
    }
}

impl std::error::Error for SocialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SocialError::SubmissionFailed { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

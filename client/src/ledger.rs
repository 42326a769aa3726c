//! Transport seam between the protocol layer and the ledger.

use anyhow::Context;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
};

/// The two ledger operations the protocol core depends on. Everything
/// else (airdrops, balances, rent) is fee-management glue that talks to
/// the concrete RPC client directly.
pub trait Ledger {
    /// Raw account data at `address`, or `None` when no account exists
    /// there. Absence is a normal state, not a fault.
    fn account_data(&self, address: &Pubkey) -> anyhow::Result<Option<Vec<u8>>>;

    /// Submits `instruction` as a single transaction signed by `payer` and
    /// blocks until the ledger confirms it.
    fn submit(&self, payer: &Keypair, instruction: Instruction) -> anyhow::Result<Signature>;
}

/// RPC-backed ledger.
pub struct RpcLedger {
    pub client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcLedger {
    /// Connects at the confirmed commitment level, strong enough that a
    /// read issued after a confirmed submission observes the write.
    pub fn new(url: impl ToString) -> Self {
        let commitment = CommitmentConfig::confirmed();
        Self {
            client: RpcClient::new_with_commitment(url.to_string(), commitment),
            commitment,
        }
    }
}

impl Ledger for RpcLedger {
    fn account_data(&self, address: &Pubkey) -> anyhow::Result<Option<Vec<u8>>> {
        let response = self
            .client
            .get_account_with_commitment(address, self.commitment)
            .with_context(|| format!("Failed to fetch account {address}"))?;
        Ok(response.value.map(|account| account.data))
    }

    fn submit(&self, payer: &Keypair, instruction: Instruction) -> anyhow::Result<Signature> {
        crate::transactions::send_transaction(&self.client, payer, &[instruction])
    }
}

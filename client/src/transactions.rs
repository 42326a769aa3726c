//! Transaction submission and the fee/rent glue around it.

use std::time::Duration;

use anyhow::Context;
use roster_interface::{USER_STATE_SEED, USER_STATE_SIZE};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::Transaction,
};

use crate::{
    logs::{log_info, log_success},
    pda::user_state_address,
};

/// Fee headroom kept on the payer on top of any rent it owes. A generous
/// multiple of the per-signature fee, same spirit as the upstream wallet
/// tooling's guess.
pub const FEE_BUFFER_LAMPORTS: u64 = 500_000;

/// Builds, signs and submits a transaction carrying `instructions`,
/// blocking until the client's commitment level is reached. No retries:
/// a rejected or unconfirmable transaction surfaces immediately.
pub fn send_transaction(
    rpc: &RpcClient,
    payer: &Keypair,
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    let blockhash = rpc
        .get_latest_blockhash()
        .context("Failed to fetch a recent blockhash")?;

    let message = Message::new(instructions, Some(&payer.pubkey()));
    let mut transaction = Transaction::new_unsigned(message);
    transaction
        .try_sign(&[payer], blockhash)
        .context("Failed to sign the transaction")?;

    rpc.send_and_confirm_transaction(&transaction)
        .context("Failed transaction submission")
}

/// Tops the payer up via airdrop when its balance cannot cover `lamports`.
pub async fn ensure_balance(rpc: &RpcClient, payer: &Keypair, lamports: u64) -> anyhow::Result<()> {
    let balance = rpc
        .get_balance(&payer.pubkey())
        .context("Failed to fetch the payer balance")?;
    if balance >= lamports {
        return Ok(());
    }

    let signature = rpc
        .request_airdrop(&payer.pubkey(), lamports - balance)
        .context("Failed to request an airdrop")?;

    let mut attempts = 0;
    while !rpc
        .confirm_transaction(&signature)
        .context("Couldn't confirm the airdrop")?
        && attempts < 10
    {
        tokio::time::sleep(Duration::from_millis(500)).await;
        attempts += 1;
    }

    let balance = rpc
        .get_balance(&payer.pubkey())
        .context("Failed to fetch the payer balance")?;
    log_info(
        "Payer",
        format!("{} holding {} lamports", payer.pubkey(), balance),
    );
    Ok(())
}

/// Creates the payer's seeded state account when it does not exist yet,
/// funded for rent exemption at the fixed record allocation. Returns the
/// derived address either way.
pub fn ensure_state_account(
    rpc: &RpcClient,
    payer: &Keypair,
    program_id: &Pubkey,
) -> anyhow::Result<Pubkey> {
    let state_address = user_state_address(&payer.pubkey(), program_id)?;
    let existing = rpc
        .get_account_with_commitment(&state_address, rpc.commitment())
        .context("Failed to look up the state account")?;
    if existing.value.is_some() {
        return Ok(state_address);
    }

    let lamports = rpc
        .get_minimum_balance_for_rent_exemption(USER_STATE_SIZE)
        .context("Failed to fetch the rent-exempt minimum")?;
    let create = system_instruction::create_account_with_seed(
        &payer.pubkey(),
        &state_address,
        &payer.pubkey(),
        USER_STATE_SEED,
        lamports,
        USER_STATE_SIZE as u64,
        program_id,
    );
    let signature = send_transaction(rpc, payer, &[create])?;
    log_success(
        "Created state account",
        format!("{state_address} ({signature})"),
    );
    Ok(state_address)
}

/// One-stop payer setup before a mutation: enough lamports for rent plus
/// fees, and an existing state account.
pub async fn prepare_payer(
    rpc: &RpcClient,
    payer: &Keypair,
    program_id: &Pubkey,
) -> anyhow::Result<Pubkey> {
    let rent = rpc
        .get_minimum_balance_for_rent_exemption(USER_STATE_SIZE)
        .context("Failed to fetch the rent-exempt minimum")?;
    ensure_balance(rpc, payer, rent + FEE_BUFFER_LAMPORTS).await?;
    ensure_state_account(rpc, payer, program_id)
}

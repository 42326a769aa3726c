//! Command-line front end for the roster protocol client.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use client::{
    config::CliConfig,
    engine::{MutationOutcome, SocialClient},
    ledger::RpcLedger,
    logs::{log_info, log_success},
    transactions::prepare_payer,
};
use itertools::Itertools;
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

#[derive(Parser)]
#[command(name = "roster", about = "Manage an on-chain friend roster")]
struct Cli {
    /// RPC endpoint; defaults to the Solana CLI config, then localhost.
    #[arg(long)]
    url: Option<String>,
    /// Program id owning the state accounts; defaults to the deployed id.
    #[arg(long)]
    program_id: Option<Pubkey>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add an identity to the caller's friend set.
    AddFriend {
        /// Target identity; defaults to the configured target.
        target: Option<Pubkey>,
    },
    /// Remove an identity from the caller's friend set.
    RemoveFriend {
        /// Target identity; defaults to the configured target.
        target: Option<Pubkey>,
    },
    /// Set the caller's presence flag.
    SetStatus {
        #[arg(value_enum)]
        status: Status,
    },
    /// List the caller's friends that are currently online.
    OnlineFriends {
        /// Emit machine-readable JSON instead of log lines.
        #[arg(long)]
        json: bool,
    },
    /// Show the caller's decoded state record.
    Show {
        /// Emit machine-readable JSON instead of log lines.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Status {
    Online,
    Offline,
}

#[derive(Serialize)]
struct StateView {
    online: bool,
    friends: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load();

    let url = cli.url.clone().unwrap_or_else(|| config.rpc_url());
    let program_id = cli.program_id.unwrap_or(roster_interface::program::ID);
    let ledger = RpcLedger::new(&url);
    log_info("Cluster", &url);

    check_program(&ledger, &program_id)?;

    let payer = config.payer();
    if matches!(
        cli.command,
        Command::AddFriend { .. } | Command::RemoveFriend { .. } | Command::SetStatus { .. }
    ) {
        prepare_payer(&ledger.client, &payer, &program_id).await?;
    }
    let social = SocialClient::new(ledger, payer, program_id);

    match cli.command {
        Command::AddFriend { target } => {
            let target = resolve_target(target, &config)?;
            match social.add_friend(&target).await? {
                MutationOutcome::Submitted(signature) => {
                    log_success("Add friend", format!("{target} ({signature})"));
                }
                MutationOutcome::AlreadySatisfied => {
                    log_info("Add friend", format!("{target} is already a friend"));
                }
            }
        }
        Command::RemoveFriend { target } => {
            let target = resolve_target(target, &config)?;
            match social.remove_friend(&target).await? {
                MutationOutcome::Submitted(signature) => {
                    log_success("Remove friend", format!("{target} ({signature})"));
                }
                MutationOutcome::AlreadySatisfied => {
                    log_info("Remove friend", format!("{target} was not a friend"));
                }
            }
        }
        Command::SetStatus { status } => {
            let online = matches!(status, Status::Online);
            if let MutationOutcome::Submitted(signature) = social.set_status(online).await? {
                let label = if online { "online" } else { "offline" };
                log_success("Set status", format!("{label} ({signature})"));
            }
        }
        Command::OnlineFriends { json } => {
            let online = social.online_friends().await?;
            let names: Vec<String> = online.iter().map(|friend| friend.to_string()).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else if names.is_empty() {
                log_info("Online friends", "none");
            } else {
                log_success("Online friends", names.iter().join(", "));
            }
        }
        Command::Show { json } => {
            let state = social.own_state().await?;
            let view = StateView {
                online: state.online,
                friends: state.friends.iter().cloned().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                log_info("Online", view.online);
                let friends = if view.friends.is_empty() {
                    "none".to_string()
                } else {
                    view.friends.iter().join(", ")
                };
                log_info("Friends", friends);
            }
        }
    }
    Ok(())
}

/// Fails fast when the roster program is not deployed at `program_id`,
/// before any state account gets created against it.
fn check_program(ledger: &RpcLedger, program_id: &Pubkey) -> anyhow::Result<()> {
    let account = ledger
        .client
        .get_account_with_commitment(program_id, ledger.client.commitment())
        .context("Failed to look up the program account")?
        .value
        .with_context(|| format!("Program {program_id} is not deployed on this cluster"))?;
    if !account.executable {
        anyhow::bail!("Account {program_id} exists but is not executable");
    }
    Ok(())
}

fn resolve_target(target: Option<Pubkey>, config: &CliConfig) -> anyhow::Result<Pubkey> {
    match target {
        Some(target) => Ok(target),
        None => config
            .default_target()?
            .context("No target given on the command line or in the config file"),
    }
}

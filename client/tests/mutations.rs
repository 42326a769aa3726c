use client::{
    e2e_helpers::TestLedger,
    engine::{MutationOutcome, Operation, SocialClient},
    error::SocialError,
};
use roster_interface::program;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

/// A client over a fresh in-memory ledger with the payer's state account
/// already allocated, plus a target identity with a ledger presence.
fn social_client() -> (SocialClient<TestLedger>, Pubkey) {
    let ledger = TestLedger::new();
    let payer = Keypair::new();
    ledger.create_state_account(&payer.pubkey(), &program::ID);

    let target = Pubkey::new_unique();
    ledger.create_system_account(&target);

    (SocialClient::new(ledger, payer, program::ID), target)
}

#[tokio::test]
async fn add_friend_is_idempotent() {
    let (client, target) = social_client();

    let first = client.add_friend(&target).await.unwrap();
    assert!(matches!(first, MutationOutcome::Submitted(_)));
    assert_eq!(client.ledger().submissions(), 1);

    let state = client.own_state().await.unwrap();
    assert!(state.is_friend(&target.to_string()));
    assert_eq!(state.friends.len(), 1);

    // The second call short-circuits before any transaction is built.
    let second = client.add_friend(&target).await.unwrap();
    assert!(matches!(second, MutationOutcome::AlreadySatisfied));
    assert_eq!(client.ledger().submissions(), 1);
    assert_eq!(client.own_state().await.unwrap().friends.len(), 1);
}

#[tokio::test]
async fn remove_absent_friend_submits_nothing() {
    let (client, target) = social_client();

    let outcome = client.remove_friend(&target).await.unwrap();
    assert!(matches!(outcome, MutationOutcome::AlreadySatisfied));
    assert_eq!(client.ledger().submissions(), 0);
    assert_eq!(client.own_state().await.unwrap().friends.len(), 0);
}

#[tokio::test]
async fn add_then_remove_round_trip() {
    let (client, target) = social_client();

    client.add_friend(&target).await.unwrap();
    assert!(client
        .own_state()
        .await
        .unwrap()
        .is_friend(&target.to_string()));

    let removed = client.remove_friend(&target).await.unwrap();
    assert!(matches!(removed, MutationOutcome::Submitted(_)));
    assert!(client.own_state().await.unwrap().friends.is_empty());
    assert_eq!(client.ledger().submissions(), 2);
}

#[tokio::test]
async fn set_status_always_submits() {
    let (client, _) = social_client();

    for (online, submissions) in [(true, 1), (true, 2), (false, 3)] {
        let outcome = client.set_status(online).await.unwrap();
        assert!(matches!(outcome, MutationOutcome::Submitted(_)));
        assert_eq!(client.ledger().submissions(), submissions);
        assert_eq!(client.own_state().await.unwrap().online, online);
    }
}

#[tokio::test]
async fn unknown_target_fails_before_submission() {
    let (client, _) = social_client();
    let unknown = Pubkey::new_unique();

    let err = client.add_friend(&unknown).await.unwrap_err();
    match err.downcast_ref::<SocialError>() {
        Some(SocialError::TargetNotFound { actor, target }) => {
            assert_eq!(*actor, client.payer_pubkey());
            assert_eq!(*target, unknown);
        }
        other => panic!("expected TargetNotFound, got {other:?}"),
    }
    assert_eq!(client.ledger().submissions(), 0);
    assert!(client.own_state().await.unwrap().friends.is_empty());
}

#[tokio::test]
async fn lost_write_surfaces_a_post_condition_failure() {
    let (client, target) = social_client();
    client.ledger().set_drop_writes(true);

    let err = client.add_friend(&target).await.unwrap_err();
    match err.downcast_ref::<SocialError>() {
        Some(SocialError::PostConditionFailed { actor, operation }) => {
            assert_eq!(*actor, client.payer_pubkey());
            assert_eq!(*operation, Operation::AddFriend(target));
        }
        other => panic!("expected PostConditionFailed, got {other:?}"),
    }
    // The transaction was submitted and confirmed; only the verify failed.
    assert_eq!(client.ledger().submissions(), 1);
    assert!(client.own_state().await.unwrap().friends.is_empty());
}

#[tokio::test]
async fn fresh_state_account_reads_as_the_empty_default() {
    let (client, _) = social_client();

    let state = client.own_state().await.unwrap();
    assert!(!state.online);
    assert!(state.friends.is_empty());
}

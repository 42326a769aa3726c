use roster_interface::{
    instructions::{AddFriend, RemoveFriend, SetStatus},
    program,
};
use solana_program::pubkey::Pubkey;

#[test]
fn add_friend_account_list() {
    let payer = Pubkey::new_unique();
    let payer_state = Pubkey::new_unique();
    let target = Pubkey::new_unique();

    let instruction = AddFriend {
        payer,
        payer_state,
        target,
    }
    .instruction();

    assert_eq!(instruction.program_id, program::ID);
    assert_eq!(instruction.data, vec![0]);

    let [payer_meta, state_meta, target_meta] = instruction.accounts.as_slice() else {
        panic!("add-friend takes exactly three accounts");
    };
    assert_eq!(payer_meta.pubkey, payer);
    assert!(payer_meta.is_signer);
    assert!(!payer_meta.is_writable);
    assert_eq!(state_meta.pubkey, payer_state);
    assert!(!state_meta.is_signer);
    assert!(state_meta.is_writable);
    assert_eq!(target_meta.pubkey, target);
    assert!(!target_meta.is_signer);
    assert!(!target_meta.is_writable);
}

#[test]
fn remove_friend_account_list() {
    let payer = Pubkey::new_unique();
    let payer_state = Pubkey::new_unique();
    let target = Pubkey::new_unique();

    let instruction = RemoveFriend {
        payer,
        payer_state,
        target,
    }
    .instruction();

    assert_eq!(instruction.program_id, program::ID);
    assert_eq!(instruction.data, vec![1]);
    assert_eq!(instruction.accounts.len(), 3);
    assert_eq!(instruction.accounts[2].pubkey, target);
    assert!(instruction.accounts[0].is_signer);
    assert!(instruction.accounts[1].is_writable);
}

#[test]
fn set_status_opcode_tracks_the_flag() {
    let payer = Pubkey::new_unique();
    let payer_state = Pubkey::new_unique();

    for (online, opcode) in [(true, 2u8), (false, 3u8)] {
        let instruction = SetStatus {
            payer,
            payer_state,
            online,
        }
        .instruction();

        assert_eq!(instruction.program_id, program::ID);
        assert_eq!(instruction.data, vec![opcode]);

        let [payer_meta, state_meta] = instruction.accounts.as_slice() else {
            panic!("set-status takes exactly two accounts");
        };
        assert!(payer_meta.is_signer);
        assert!(!payer_meta.is_writable);
        assert!(state_meta.is_writable);
    }
}

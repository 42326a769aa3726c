use roster_interface::state::{decode_record, write_record};
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg};

use crate::context::FriendContext;

pub fn process_add_friend(accounts: &[AccountInfo]) -> ProgramResult {
    let ctx = FriendContext::load(accounts)?;
    let target = ctx.target.key.to_string();

    let mut data = ctx.state.try_borrow_mut_data()?;
    let mut state = decode_record(&data);
    if state.add_friend(&target) {
        write_record(&state, &mut data[..])?;
        msg!("Added {} as a friend of {}", target, ctx.initiator.key);
    } else {
        msg!("{} is already a friend of {}", target, ctx.initiator.key);
    }
    Ok(())
}

pub fn process_remove_friend(accounts: &[AccountInfo]) -> ProgramResult {
    let ctx = FriendContext::load(accounts)?;
    let target = ctx.target.key.to_string();

    let mut data = ctx.state.try_borrow_mut_data()?;
    let mut state = decode_record(&data);
    if state.remove_friend(&target) {
        write_record(&state, &mut data[..])?;
        msg!("Removed {} from the friends of {}", target, ctx.initiator.key);
    } else {
        msg!("{} is not a friend of {}", target, ctx.initiator.key);
    }
    Ok(())
}

use roster_interface::state::{decode_record, write_record};
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg};

use crate::context::StatusContext;

pub fn process_set_status(accounts: &[AccountInfo], online: bool) -> ProgramResult {
    let ctx = StatusContext::load(accounts)?;
    let label = if online { "online" } else { "offline" };

    let mut data = ctx.state.try_borrow_mut_data()?;
    let mut state = decode_record(&data);
    if state.set_online(online) {
        write_record(&state, &mut data[..])?;
        msg!("Set status of {} to {}", ctx.initiator.key, label);
    } else {
        msg!("Status of {} is already {}", ctx.initiator.key, label);
    }
    Ok(())
}

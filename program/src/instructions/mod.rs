pub mod friend;
pub mod status;

pub use {
    friend::{process_add_friend, process_remove_friend},
    status::process_set_status,
};

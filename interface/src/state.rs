//! The per-user record stored in a roster state account.
//!
//! On the wire a record is a 4-byte little-endian length prefix `L`
//! followed by `L` bytes of borsh body: one status byte, then a map of
//! friend identity strings to (empty) strings. The map's value channel is
//! dead weight kept for wire compatibility; in memory the friend list is a
//! genuine set.

use std::collections::{BTreeSet, HashMap};

use borsh::{BorshDeserialize, BorshSerialize};

use crate::{error::RosterError, USER_STATE_SIZE};

/// Bytes reserved for the little-endian body length prefix.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// Smallest body a written record can have: the status byte plus the map
/// header of an empty friend map. A prefix announcing anything shorter is
/// zero-filled storage that has never been written to, which decodes as
/// the empty default rather than an error.
pub const MIN_RECORD_BODY_LEN: usize = 5;

static_assertions::const_assert!(USER_STATE_SIZE > LENGTH_PREFIX_LEN + MIN_RECORD_BODY_LEN);

/// In-memory view of one user's social state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserState {
    pub online: bool,
    /// Base-58 identity strings of the user's friends.
    pub friends: BTreeSet<String>,
}

impl UserState {
    /// Inserts `target` into the friend set. Returns false when the entry
    /// was already present.
    pub fn add_friend(&mut self, target: &str) -> bool {
        self.friends.insert(target.to_string())
    }

    /// Removes `target` from the friend set. Returns false when there was
    /// nothing to remove.
    pub fn remove_friend(&mut self, target: &str) -> bool {
        self.friends.remove(target)
    }

    /// Sets the online flag. Returns false when the flag already had the
    /// requested value.
    pub fn set_online(&mut self, online: bool) -> bool {
        let changed = self.online != online;
        self.online = online;
        changed
    }

    pub fn is_friend(&self, target: &str) -> bool {
        self.friends.contains(target)
    }
}

/// Borsh shape of the record body. Friend map keys are the identities;
/// values are written as empty strings and ignored on decode.
#[derive(BorshDeserialize, BorshSerialize, Debug, Default)]
struct RawRecord {
    online: u8,
    friends: HashMap<String, String>,
}

impl From<&UserState> for RawRecord {
    fn from(state: &UserState) -> Self {
        Self {
            online: state.online as u8,
            friends: state
                .friends
                .iter()
                .map(|friend| (friend.clone(), String::new()))
                .collect(),
        }
    }
}

impl From<RawRecord> for UserState {
    fn from(raw: RawRecord) -> Self {
        Self {
            online: raw.online != 0,
            friends: raw.friends.into_keys().collect(),
        }
    }
}

/// Encodes `state` as a length-prefixed record, exactly as the program
/// lays it out at the start of a state account.
pub fn encode_record(state: &UserState) -> std::io::Result<Vec<u8>> {
    let body = borsh::to_vec(&RawRecord::from(state))?;
    let mut record = Vec::with_capacity(LENGTH_PREFIX_LEN + body.len());
    record.extend_from_slice(&(body.len() as u32).to_le_bytes());
    record.extend_from_slice(&body);
    Ok(record)
}

/// Serializes `state` into the front of `data`, a full account buffer.
/// Fails when the record no longer fits the fixed allocation.
pub fn write_record(state: &UserState, data: &mut [u8]) -> Result<(), RosterError> {
    let record = encode_record(state).map_err(|_| RosterError::RecordSerialization)?;
    if data.len() < record.len() {
        return Err(RosterError::RecordTooLarge);
    }
    data[..record.len()].copy_from_slice(&record);
    Ok(())
}

/// Decodes a length-prefixed record. Absent, zero-filled, truncated or
/// otherwise malformed storage decodes to the empty default; an account
/// that was allocated but never written to is a normal state, not a fault.
pub fn decode_record(data: &[u8]) -> UserState {
    if data.len() < LENGTH_PREFIX_LEN {
        return UserState::default();
    }
    let mut prefix = [0u8; LENGTH_PREFIX_LEN];
    prefix.copy_from_slice(&data[..LENGTH_PREFIX_LEN]);
    let body_len = u32::from_le_bytes(prefix) as usize;
    if body_len < MIN_RECORD_BODY_LEN {
        return UserState::default();
    }
    match data.get(LENGTH_PREFIX_LEN..LENGTH_PREFIX_LEN + body_len) {
        Some(body) => RawRecord::try_from_slice(body)
            .map(UserState::from)
            .unwrap_or_default(),
        None => UserState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(online: bool, friends: &[&str]) -> UserState {
        UserState {
            online,
            friends: friends.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn round_trip_default() {
        let encoded = encode_record(&UserState::default()).unwrap();
        assert_eq!(decode_record(&encoded), UserState::default());
    }

    #[test]
    fn round_trip_populated() {
        for s in [
            state(true, &[]),
            state(false, &["9y4mUHvnr2cXYNZDybbM4CkFnUeWxAKawviDzpiTjf98"]),
            state(true, &["a", "b", "c", "dddddddddddddddddddddddddddddddd"]),
        ] {
            let encoded = encode_record(&s).unwrap();
            assert_eq!(decode_record(&encoded), s);
        }
    }

    #[test]
    fn wire_shape_is_stable() {
        // online, map of two entries sorted by key, empty-string values.
        let encoded = encode_record(&state(true, &["cd", "ab"])).unwrap();
        #[rustfmt::skip]
        let expected = vec![
            25, 0, 0, 0,                // body length prefix
            1,                          // online
            2, 0, 0, 0,                 // friend count
            2, 0, 0, 0, b'a', b'b',     // key "ab"
            0, 0, 0, 0,                 // value ""
            2, 0, 0, 0, b'c', b'd',     // key "cd"
            0, 0, 0, 0,                 // value ""
        ];
        assert_eq!(encoded, expected);
    }

    #[test]
    fn decode_ignores_the_value_channel() {
        #[rustfmt::skip]
        let buf = vec![
            17, 0, 0, 0,
            0,
            1, 0, 0, 0,
            2, 0, 0, 0, b'k', b'1',
            2, 0, 0, 0, b'z', b'z',     // non-empty value, still just a set entry
        ];
        assert_eq!(decode_record(&buf), state(false, &["k1"]));
    }

    #[test]
    fn short_buffers_decode_to_default() {
        for len in 0..LENGTH_PREFIX_LEN {
            assert_eq!(decode_record(&vec![0xff; len]), UserState::default());
        }
    }

    #[test]
    fn zero_filled_storage_decodes_to_default() {
        assert_eq!(decode_record(&[0u8; 1024]), UserState::default());
    }

    #[test]
    fn sub_threshold_body_length_decodes_to_default() {
        // Prefix announces 4 bytes, below the minimum viable body.
        let buf = [vec![4, 0, 0, 0], vec![1, 0, 0, 0]].concat();
        assert_eq!(decode_record(&buf), UserState::default());
    }

    #[test]
    fn minimal_record_is_distinct_from_fresh_storage() {
        // A real record with zero friends still carries the status flag.
        let buf = [vec![5, 0, 0, 0], vec![1, 0, 0, 0, 0]].concat();
        assert_eq!(decode_record(&buf), state(true, &[]));
    }

    #[test]
    fn truncated_body_decodes_to_default() {
        let mut encoded = encode_record(&state(true, &["ab", "cd"])).unwrap();
        encoded.truncate(10);
        assert_eq!(decode_record(&encoded), UserState::default());
    }

    #[test]
    fn oversized_length_prefix_decodes_to_default() {
        let buf = [vec![255, 255, 0, 0], vec![1, 0, 0, 0, 0]].concat();
        assert_eq!(decode_record(&buf), UserState::default());
    }

    #[test]
    fn malformed_body_decodes_to_default() {
        // Count announces one entry but the body ends there.
        let buf = [vec![5, 0, 0, 0], vec![1, 1, 0, 0, 0]].concat();
        assert_eq!(decode_record(&buf), UserState::default());
    }

    #[test]
    fn write_record_respects_the_buffer_bounds() {
        let s = state(true, &["ab"]);
        let record = encode_record(&s).unwrap();

        let mut data = vec![0u8; record.len() + 100];
        write_record(&s, &mut data).unwrap();
        assert_eq!(&data[..record.len()], &record[..]);
        assert_eq!(decode_record(&data), s);

        let mut tight = vec![0u8; record.len() - 1];
        assert_eq!(write_record(&s, &mut tight), Err(RosterError::RecordTooLarge));
    }

    #[test]
    fn transitions_report_changes() {
        let mut s = UserState::default();
        assert!(s.add_friend("x"));
        assert!(!s.add_friend("x"));
        assert!(s.is_friend("x"));
        assert!(s.remove_friend("x"));
        assert!(!s.remove_friend("x"));
        assert!(s.set_online(true));
        assert!(!s.set_online(true));
        assert!(s.set_online(false));
    }
}

//! Shared quickcheck plumbing for the container property tests.

use quickcheck::{Arbitrary, Gen};

use crate::domain::bid::Bid;

/// One random mutation applied to a container under test.
///
/// Keys stay in `u8` so operation sequences collide often enough to
/// exercise the duplicate and removal paths.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert a bid whose id is the decimal rendering of the key.
    Insert(u8),
    /// Remove the bid with that id, if present.
    Remove(u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(u8::arbitrary(g)),
            _ => Op::Remove(u8::arbitrary(g)),
        }
    }
}

/// Build a bid whose id is the decimal rendering of `key`.
///
/// The id is numeric on purpose: the same operation streams can drive the
/// hash table, whose keys must parse as integers.
pub(crate) fn numbered_bid(key: u8) -> Bid {
    Bid::new(
        key.to_string(),
        format!("Item {key}"),
        "General",
        f64::from(key),
    )
}

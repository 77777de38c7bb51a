//! Chained hash table keyed on numeric bid ids.
//!
//! The bucket array is fixed at construction; collisions chain through
//! `Box`-owned entries. The hash is the id parsed as an integer, reduced
//! modulo the bucket count, so a non-numeric id can never be stored and
//! is rejected loudly instead of being truncated to garbage.

use thiserror::Error;

use crate::constants::DEFAULT_TABLE_SIZE;
use crate::domain::bid::Bid;

/// Error raised when an id cannot be used as a hash key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashKeyError {
    /// The id could not be interpreted as a numeric key.
    #[error("bid id {id:?} is not numeric and cannot be hashed")]
    NonNumericId {
        /// The offending id.
        id: String,
    },
}

struct Entry {
    /// Parsed numeric id; compared before the id string during chain
    /// scans. Ids with leading zeros share a key but differ as strings.
    key: u32,
    bid: Bid,
    next: Option<Box<Entry>>,
}

/// A fixed-size hash table of bids with collision chaining.
///
/// Inserting an id that is already present replaces the stored bid;
/// otherwise new entries are appended at the end of their chain.
pub struct BidHashTable {
    buckets: Vec<Option<Box<Entry>>>,
    len: usize,
}

impl BidHashTable {
    /// Create a table with [`DEFAULT_TABLE_SIZE`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_TABLE_SIZE)
    }

    /// Create a table with a specific bucket count.
    ///
    /// # Panics
    ///
    /// Panics when `buckets` is zero; the modulo reduction needs at least
    /// one bucket.
    pub fn with_buckets(buckets: usize) -> Self {
        assert!(buckets > 0, "hash table needs at least one bucket");
        Self {
            buckets: (0..buckets).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Number of bids currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table holds no bids.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets the table was built with.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Insert a bid, keyed on its numeric id.
    ///
    /// Returns the previously stored bid when the id was already present.
    ///
    /// # Errors
    ///
    /// Returns [`HashKeyError::NonNumericId`] when the id does not parse
    /// as an integer; nothing is stored in that case.
    pub fn insert(&mut self, bid: Bid) -> Result<Option<Bid>, HashKeyError> {
        let key = parse_key(&bid.id)?;
        let index = self.bucket_index(key);

        let mut cursor = &mut self.buckets[index];
        loop {
            match cursor {
                None => {
                    *cursor = Some(Box::new(Entry {
                        key,
                        bid,
                        next: None,
                    }));
                    self.len += 1;
                    return Ok(None);
                }
                Some(entry) if entry.key == key && entry.bid.id == bid.id => {
                    let old = std::mem::replace(&mut entry.bid, bid);
                    return Ok(Some(old));
                }
                Some(entry) => cursor = &mut entry.next,
            }
        }
    }

    /// Search for a bid by id.
    ///
    /// # Errors
    ///
    /// Returns [`HashKeyError::NonNumericId`] when the id does not parse
    /// as an integer.
    pub fn search(&self, id: &str) -> Result<Option<&Bid>, HashKeyError> {
        let key = parse_key(id)?;
        let index = self.bucket_index(key);

        let mut current = self.buckets[index].as_deref();
        while let Some(entry) = current {
            if entry.key == key && entry.bid.id == id {
                return Ok(Some(&entry.bid));
            }
            current = entry.next.as_deref();
        }
        Ok(None)
    }

    /// Remove the bid with the given id and return it.
    ///
    /// Unlinks the matched entry whether it sits at the bucket head, in
    /// the middle of the chain, or at the tail; a miss is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`HashKeyError::NonNumericId`] when the id does not parse
    /// as an integer.
    pub fn remove(&mut self, id: &str) -> Result<Option<Bid>, HashKeyError> {
        let key = parse_key(id)?;
        let index = self.bucket_index(key);

        let mut cursor = &mut self.buckets[index];
        loop {
            let is_match = match cursor.as_deref() {
                None => return Ok(None),
                Some(entry) => entry.key == key && entry.bid.id == id,
            };

            if is_match {
                let mut entry = match cursor.take() {
                    Some(entry) => entry,
                    None => return Ok(None),
                };
                *cursor = entry.next.take();
                self.len -= 1;
                return Ok(Some(entry.bid));
            }

            match cursor {
                Some(entry) => cursor = &mut entry.next,
                None => return Ok(None),
            }
        }
    }

    /// Iterate every stored bid, bucket by bucket and chain by chain.
    pub fn iter(&self) -> impl Iterator<Item = &Bid> + '_ {
        self.buckets.iter().flat_map(|bucket| ChainIter {
            current: bucket.as_deref(),
        })
    }

    fn bucket_index(&self, key: u32) -> usize {
        (key as usize) % self.buckets.len()
    }
}

impl Default for BidHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BidHashTable {
    // Unlink chains iteratively; the derived drop recurses per entry.
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            let mut current = bucket.take();
            while let Some(mut entry) = current {
                current = entry.next.take();
            }
        }
    }
}

struct ChainIter<'a> {
    current: Option<&'a Entry>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current?;
        self.current = entry.next.as_deref();
        Some(&entry.bid)
    }
}

fn parse_key(id: &str) -> Result<u32, HashKeyError> {
    id.parse::<u32>().map_err(|_| HashKeyError::NonNumericId {
        id: id.to_string(),
    })
}


#[cfg(test)]
mod quicktests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::quick::{Op, numbered_bid};

    quickcheck::quickcheck! {
        fn fuzz_matches_map_model(ops: Vec<Op>) -> bool {
            // A single bucket turns every operation into a chain walk,
            // which is where the splice logic lives.
            let mut table = BidHashTable::with_buckets(1);
            let mut map = HashMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        let bid = numbered_bid(key);
                        table.insert(bid.clone()).unwrap();
                        map.insert(bid.id.clone(), bid);
                    }
                    Op::Remove(key) => {
                        let id = key.to_string();
                        if table.remove(&id).unwrap() != map.remove(&id) {
                            return false;
                        }
                    }
                }
            }

            table.len() == map.len()
                && map.keys().all(|id| table.search(id).unwrap() == map.get(id))
        }
    }
}

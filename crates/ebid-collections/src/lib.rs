//! ebid-collections - bid containers for the eBid console exercises
//!
//! This crate provides functionality to:
//! - Hold auction bids in a binary search tree, a chained hash table, or a
//!   singly linked list, keyed on the bid id
//! - Sort bid vectors in place by title (selection sort and quick sort)
//! - Load bids from the monthly sales CSV export

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use domain::bid::Bid;
pub use domain::bst::BidTree;
pub use domain::hash_table::{BidHashTable, HashKeyError};
pub use domain::linked_list::BidList;
pub use domain::sorting::{quick_sort, selection_sort};
pub use infra::csv_io::{LoadOutcome, load_bids};

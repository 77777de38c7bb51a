use ebid_collections::{Bid, BidTree};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

fn bid(id: &str) -> Bid {
    Bid::new(id, format!("Title {id}"), "General", 25.0)
}

fn shuffled_ids(count: u32) -> Vec<String> {
    let mut ids: Vec<String> = (0..count).map(|n| format!("{:05}", 90000 + n)).collect();
    let mut rng = StdRng::seed_from_u64(0xEB1D);
    ids.shuffle(&mut rng);
    ids
}

#[test]
fn in_order_traversal_is_sorted_for_any_insert_order() {
    let ids = shuffled_ids(500);

    let mut tree = BidTree::new();
    for id in &ids {
        tree.insert(bid(id));
    }

    let traversed: Vec<&str> = tree.in_order().map(|b| b.id.as_str()).collect();
    assert_eq!(traversed.len(), 500);
    assert!(traversed.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn node_count_tracks_inserts_minus_removes() {
    let ids = shuffled_ids(200);

    let mut tree = BidTree::new();
    for id in &ids {
        tree.insert(bid(id));
    }
    assert_eq!(tree.len(), 200);

    for id in ids.iter().take(75) {
        assert!(tree.remove(id).is_some());
    }
    assert_eq!(tree.len(), 125);
    assert_eq!(tree.in_order().count(), 125);
}

#[test]
fn removed_keys_are_unreachable_and_kept_keys_stay_reachable() {
    let ids = shuffled_ids(300);
    let (removed, kept) = ids.split_at(150);

    let mut tree = BidTree::new();
    for id in &ids {
        tree.insert(bid(id));
    }
    for id in removed {
        assert!(tree.remove(id).is_some(), "{id} was inserted");
    }

    for id in removed {
        assert!(tree.search(id).is_none(), "{id} was removed");
    }
    for id in kept {
        assert!(tree.search(id).is_some(), "{id} was never removed");
    }

    // the ordering invariant survives the removals
    let traversed: Vec<&str> = tree.in_order().map(|b| b.id.as_str()).collect();
    assert!(traversed.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn interleaved_inserts_and_removes_agree_with_search() {
    let mut tree = BidTree::new();

    tree.insert(bid("98223"));
    tree.insert(bid("97990"));
    assert!(tree.remove("98223").is_some());
    tree.insert(bid("98356"));
    tree.insert(bid("98223"));
    assert!(tree.remove("97990").is_some());

    assert!(tree.search("97990").is_none());
    assert!(tree.search("98223").is_some());
    assert!(tree.search("98356").is_some());
    assert_eq!(tree.len(), 2);
}

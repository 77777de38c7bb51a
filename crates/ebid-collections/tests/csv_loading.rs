use std::io::Write;

use ebid_collections::{Bid, BidHashTable, BidList, BidTree, load_bids, quick_sort, selection_sort};

const HEADER: &str =
    "ArticleTitle,ArticleID,Department,CloseDate,WinningBid,CC Fee,FeePercent,AuctionTitle,Fund,InventoryID";

fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp csv");
    writeln!(file, "{HEADER}").expect("write header");
    for row in rows {
        writeln!(file, "{row}").expect("write row");
    }
    file
}

fn zebra_and_apple() -> tempfile::NamedTempFile {
    write_csv(&[
        "Zebra,98109,ADM,2016-12-10,$100.00,,2.95,December Sale,A,1001",
        "Apple,98110,ADM,2016-12-10,$50.00,,2.95,December Sale,B,1002",
    ])
}

#[test]
fn loaded_bids_carry_the_expected_fields() {
    let file = zebra_and_apple();
    let outcome = load_bids(file.path()).expect("load");

    assert_eq!(outcome.skipped, 0);
    assert_eq!(
        outcome.bids,
        vec![
            Bid::new("98109", "Zebra", "A", 100.0),
            Bid::new("98110", "Apple", "B", 50.0),
        ]
    );
}

#[test]
fn end_to_end_tree_scenario() {
    let file = zebra_and_apple();
    let outcome = load_bids(file.path()).expect("load");

    let mut tree = BidTree::new();
    for bid in outcome.bids {
        tree.insert(bid);
    }

    let apple = tree.search("98110").expect("loaded bid");
    assert_eq!(apple.title, "Apple");

    assert!(tree.remove("98109").is_some());
    assert!(tree.search("98109").is_none());
    assert_eq!(tree.len(), 1);
}

#[test]
fn end_to_end_hash_table_scenario() {
    let file = zebra_and_apple();
    let outcome = load_bids(file.path()).expect("load");

    let mut table = BidHashTable::new();
    for bid in outcome.bids {
        table.insert(bid).expect("numeric export ids");
    }

    let apple = table.search("98110").expect("numeric key").expect("loaded bid");
    assert_eq!(apple.title, "Apple");
    assert_eq!(apple.amount, 50.0);

    assert!(table.remove("98109").expect("numeric key").is_some());
    assert_eq!(table.search("98109").expect("numeric key"), None);
}

#[test]
fn end_to_end_list_scenario() {
    let file = zebra_and_apple();
    let outcome = load_bids(file.path()).expect("load");

    let mut list = BidList::new();
    for bid in outcome.bids {
        list.append(bid);
    }

    assert_eq!(list.search("98110").map(|b| b.title.as_str()), Some("Apple"));
    assert!(list.remove("98109").is_some());
    assert!(list.search("98109").is_none());
    assert_eq!(list.len(), 1);
}

#[test]
fn end_to_end_sorting_scenario() {
    let file = zebra_and_apple();

    let sorted_titles = |mut bids: Vec<Bid>, sort: fn(&mut [Bid])| {
        sort(&mut bids);
        bids.into_iter().map(|b| b.title).collect::<Vec<_>>()
    };

    let outcome = load_bids(file.path()).expect("load");
    assert_eq!(
        sorted_titles(outcome.bids.clone(), selection_sort),
        vec!["Apple", "Zebra"]
    );
    assert_eq!(
        sorted_titles(outcome.bids, quick_sort),
        vec!["Apple", "Zebra"]
    );
}

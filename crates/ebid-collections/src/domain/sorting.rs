//! In-place sorting of bid slices by title.
//!
//! Both algorithms order on the composite `(title, id)` key. The id
//! tie-break makes the order total, so selection sort and quick sort
//! produce the same output for the same input even when titles repeat.

use std::cmp::Ordering;

use crate::domain::bid::Bid;

fn compare(a: &Bid, b: &Bid) -> Ordering {
    a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id))
}

/// Selection sort: for each position, swap in the minimum of the
/// remaining range. O(n²) comparisons regardless of input order.
pub fn selection_sort(bids: &mut [Bid]) {
    for i in 0..bids.len() {
        let mut min_index = i;
        for j in (i + 1)..bids.len() {
            if compare(&bids[j], &bids[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        if min_index != i {
            bids.swap(i, min_index);
        }
    }
}

/// Quick sort with a Hoare partition around the mid-index element.
/// Average O(n log n); already-sorted, reverse-sorted, and all-equal
/// inputs all terminate.
pub fn quick_sort(bids: &mut [Bid]) {
    if bids.len() < 2 {
        return;
    }
    quick_sort_range(bids, 0, bids.len() - 1);
}

fn quick_sort_range(bids: &mut [Bid], begin: usize, end: usize) {
    // one bid or less in range
    if begin >= end {
        return;
    }

    // split is the highest index of the low partition
    let split = partition(bids, begin, end);

    quick_sort_range(bids, begin, split);
    quick_sort_range(bids, split + 1, end);
}

/// Partition `bids[begin..=end]` around the value at the midpoint.
///
/// The low and high cursors walk inward, swapping out-of-place pairs,
/// until they cross; everything at or left of the returned index
/// compares no greater than everything right of it.
fn partition(bids: &mut [Bid], begin: usize, end: usize) -> usize {
    let mid = begin + (end - begin) / 2;
    let pivot = bids[mid].clone();

    let mut low = begin;
    let mut high = end;
    loop {
        while compare(&bids[low], &pivot) == Ordering::Less {
            low += 1;
        }
        while compare(&pivot, &bids[high]) == Ordering::Less {
            high -= 1;
        }

        if low >= high {
            return high;
        }

        bids.swap(low, high);
        low += 1;
        high -= 1;
    }
}

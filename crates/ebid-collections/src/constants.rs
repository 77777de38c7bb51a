//! Shared constants for the bid exercises.

// =============================================================================
// Hash table parameters
// =============================================================================

/// Number of buckets in the chained hash table.
///
/// Sized for the smaller monthly sales file. The table never resizes;
/// collisions chain within their bucket.
pub const DEFAULT_TABLE_SIZE: usize = 179;

// =============================================================================
// CSV layout
// =============================================================================

/// Column holding the bid title.
pub const TITLE_COLUMN: usize = 0;

/// Column holding the bid id.
pub const ID_COLUMN: usize = 1;

/// Column holding the winning bid amount (currency formatted).
pub const AMOUNT_COLUMN: usize = 4;

/// Column holding the fund tag.
pub const FUND_COLUMN: usize = 8;

/// Minimum number of columns a data row must carry.
pub const MIN_COLUMNS: usize = 9;

// =============================================================================
// Defaults
// =============================================================================

/// Data file used when no path argument is given.
pub const DEFAULT_CSV_PATH: &str = "eBid_Monthly_Sales_Dec_2016.csv";

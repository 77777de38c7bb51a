//! Infrastructure layer - file I/O
//!
//! This module handles the CSV data source; the containers themselves
//! never touch a file.

pub mod csv_io;

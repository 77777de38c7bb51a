//! Application layer - console plumbing shared by the exercise binaries.

pub mod console;

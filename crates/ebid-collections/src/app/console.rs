//! Console prompting and elapsed-time reporting.
//!
//! Every exercise binary drives a numbered menu over stdin; the helpers
//! here keep the prompt/flush/trim plumbing and the timing report format
//! in one place.

use std::io::{self, Write};
use std::time::Duration;

use crate::domain::bid::{Bid, parse_amount};

/// Print `label` without a newline, flush, and read one trimmed line
/// from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Interactively read a full bid from stdin.
///
/// The amount prompt repeats until the input parses as a currency value,
/// so a typo never silently becomes a zero amount.
pub fn prompt_bid() -> io::Result<Bid> {
    let id = prompt("Enter Id: ")?;
    let title = prompt("Enter title: ")?;
    let fund = prompt("Enter fund: ")?;

    let amount = loop {
        let raw = prompt("Enter amount: ")?;
        match parse_amount(&raw) {
            Ok(amount) => break amount,
            Err(err) => println!("{err}, try again."),
        }
    };

    Ok(Bid::new(id, title, fund, amount))
}

/// Report an operation's elapsed time in the exercises' two-line format.
pub fn report_elapsed(elapsed: Duration) {
    println!("time: {} microseconds", elapsed.as_micros());
    println!("time: {:.6} seconds", elapsed.as_secs_f64());
}

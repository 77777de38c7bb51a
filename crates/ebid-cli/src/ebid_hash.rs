//! Chained hash table exercise CLI
//!
//! Usage: ebid_hash [csv_path] [bid_key]
//!
//! Loads the monthly sales export into a fixed-size hash table keyed on
//! the numeric bid id, then offers an interactive menu to display every
//! chain and to find or remove the bid named by `bid_key`.
//!
//! Defaults: eBid_Monthly_Sales_Dec_2016.csv / 98109

use std::env;
use std::process;
use std::time::Instant;

use ebid_collections::app::console;
use ebid_collections::constants::DEFAULT_CSV_PATH;
use ebid_collections::{BidHashTable, load_bids};
use log::warn;

const DEFAULT_BID_KEY: &str = "98109";

struct Args {
    csv_path: String,
    bid_key: String,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [csv_path] [bid_key]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [csv_path]    Bid CSV file (default: {})", DEFAULT_CSV_PATH);
    eprintln!("  [bid_key]     Bid id to find/remove (default: {})", DEFAULT_BID_KEY);
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut positional = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            value if !value.starts_with('-') => positional.push(value.to_string()),
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    if positional.len() > 2 {
        return Err(format!("Unexpected argument: {}", positional[2]));
    }

    let mut positional = positional.into_iter();
    Ok(Args {
        csv_path: positional
            .next()
            .unwrap_or_else(|| DEFAULT_CSV_PATH.to_string()),
        bid_key: positional
            .next()
            .unwrap_or_else(|| DEFAULT_BID_KEY.to_string()),
    })
}

enum MenuChoice {
    Load,
    Display,
    Find,
    Remove,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Load),
            "2" => Some(Self::Display),
            "3" => Some(Self::Find),
            "4" => Some(Self::Remove),
            "9" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!("Menu:");
    println!("  1. Load Bids");
    println!("  2. Display All Bids");
    println!("  3. Find Bid");
    println!("  4. Remove Bid");
    println!("  9. Exit");
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            process::exit(1);
        }
    };

    let mut table = BidHashTable::new();

    loop {
        print_menu();
        let input = match console::prompt("Enter choice: ") {
            Ok(input) => input,
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                process::exit(1);
            }
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            println!("{} is not a valid option.", input);
            continue;
        };

        match choice {
            MenuChoice::Load => {
                println!("Loading CSV file {}", args.csv_path);
                table = BidHashTable::new();

                let start = Instant::now();
                match load_bids(&args.csv_path) {
                    Ok(outcome) => {
                        let mut rejected = outcome.skipped;
                        for bid in outcome.bids {
                            if let Err(err) = table.insert(bid) {
                                // a non-numeric id cannot be hashed
                                warn!("{}", err);
                                rejected += 1;
                            }
                        }
                        println!("{} bids read", table.len());
                        if rejected > 0 {
                            println!("{} rows skipped", rejected);
                        }
                        console::report_elapsed(start.elapsed());
                    }
                    Err(err) => eprintln!("Error loading {}: {}", args.csv_path, err),
                }
            }

            MenuChoice::Display => {
                for bid in table.iter() {
                    println!("{}", bid);
                }
            }

            MenuChoice::Find => {
                let start = Instant::now();
                let found = table.search(&args.bid_key);
                let elapsed = start.elapsed();

                match found {
                    Ok(Some(bid)) => println!("{}", bid),
                    Ok(None) => println!("Bid Id {} not found.", args.bid_key),
                    Err(err) => eprintln!("Error: {}", err),
                }
                console::report_elapsed(elapsed);
            }

            MenuChoice::Remove => match table.remove(&args.bid_key) {
                Ok(Some(bid)) => {
                    println!("Removed bid {}", args.bid_key);
                    println!("{}", bid);
                }
                Ok(None) => println!("Bid Id {} not found.", args.bid_key),
                Err(err) => eprintln!("Error: {}", err),
            },

            MenuChoice::Exit => break,
        }
    }

    println!("Good bye.");
}

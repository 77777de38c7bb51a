//! Vector sorting exercise CLI
//!
//! Usage: ebid_sort [csv_path]
//!
//! Loads the monthly sales export into a vector and sorts it in place by
//! title with either selection sort or quick sort, reporting elapsed
//! time for each run.
//!
//! Default: eBid_Monthly_Sales_Dec_2016.csv

use std::env;
use std::process;
use std::time::Instant;

use ebid_collections::app::console;
use ebid_collections::constants::DEFAULT_CSV_PATH;
use ebid_collections::{Bid, load_bids, quick_sort, selection_sort};

struct Args {
    csv_path: String,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [csv_path]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [csv_path]    Bid CSV file (default: {})", DEFAULT_CSV_PATH);
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

    if positional.len() > 1 {
        return Err(format!("Unexpected argument: {}", positional[1]));
    }

    Ok(Args {
        csv_path: positional
            .into_iter()
            .next()
            .unwrap_or_else(|| DEFAULT_CSV_PATH.to_string()),
    })
}

enum MenuChoice {
    Load,
    Display,
    SelectionSort,
    QuickSort,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Load),
            "2" => Some(Self::Display),
            "3" => Some(Self::SelectionSort),
            "4" => Some(Self::QuickSort),
            "9" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!("Menu:");
    println!("  1. Load Bids");
    println!("  2. Display All Bids");
    println!("  3. Selection Sort All Bids");
    println!("  4. Quick Sort All Bids");
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

    let mut bids: Vec<Bid> = Vec::new();

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

                let start = Instant::now();
                match load_bids(&args.csv_path) {
                    Ok(outcome) => {
                        let skipped = outcome.skipped;
                        bids = outcome.bids;
                        println!("{} bids read", bids.len());
                        if skipped > 0 {
                            println!("{} rows skipped", skipped);
                        }
                        console::report_elapsed(start.elapsed());
                    }
                    Err(err) => eprintln!("Error loading {}: {}", args.csv_path, err),
                }
            }

            MenuChoice::Display => {
                for bid in &bids {
                    println!("{}", bid);
                }
                println!();
            }

            MenuChoice::SelectionSort => {
                let start = Instant::now();
                selection_sort(&mut bids);
                let elapsed = start.elapsed();

                println!("Sorted {} bids alphabetically by title.", bids.len());
                console::report_elapsed(elapsed);
            }

            MenuChoice::QuickSort => {
                let start = Instant::now();
                quick_sort(&mut bids);
                let elapsed = start.elapsed();

                println!("Sorted {} bids alphabetically by title.", bids.len());
                console::report_elapsed(elapsed);
            }

            MenuChoice::Exit => break,
        }
    }

    println!("Good bye.");
}

//! Interest Bank CLI
//!
//! Interactive text menu for managing interest-bearing bank accounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --date 2024-01-01 --seed 42
//! cargo run -- --no-menu --export accounts.csv < commands.txt
//! ```
//!
//! Commands are read from stdin and results written to stdout. Log output
//! goes to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (I/O failure, export failure)

use interest_bank::cli;
use interest_bank::io::{export_accounts_csv, Session};
use interest_bank::logging;
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init_logging(&args.log_level);

    let config = args.to_session_config();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&config, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Some(path) = &args.export {
        if let Err(e) = export_accounts_csv(session.registry(), path) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

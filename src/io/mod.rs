//! I/O module
//!
//! Handles the interactive menu and account listing output.
//!
//! # Components
//!
//! - `tokens` - Whitespace-separated token reader over buffered input
//! - `session` - Text menu that drives the account registry
//! - `csv_format` - Interest rendering and CSV export of account listings

pub mod csv_format;
pub mod session;
pub mod tokens;

pub use csv_format::{export_accounts_csv, format_interest, write_accounts_csv, AccountRow};
pub use session::{MenuChoice, Session, SessionConfig};
pub use tokens::TokenReader;

//! CSV format handling for account listings
//!
//! This module centralizes output format concerns:
//! - Interest rendering shared by the menu and CSV output
//! - Account listing serialization
//!
//! `format_interest` and `write_accounts_csv` are pure (no file I/O) for easy
//! testing.

use crate::core::AccountRegistry;
use crate::types::{AccountId, AccountSummary, AccountType, Amount, BankError};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Decimal places shown for interest values
pub const INTEREST_DECIMAL_PLACES: u32 = 2;

/// CSV row for one account, columns: id, type, balance, interest
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AccountRow {
    pub id: AccountId,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub balance: Amount,
    pub interest: String,
}

impl From<&AccountSummary> for AccountRow {
    fn from(summary: &AccountSummary) -> Self {
        AccountRow {
            id: summary.id,
            account_type: summary.account_type,
            balance: summary.balance,
            interest: format_interest(summary.interest),
        }
    }
}

/// Render an interest value with exactly two decimal places
///
/// Rounds half away from zero.
pub fn format_interest(interest: Decimal) -> String {
    let mut rounded = interest
        .round_dp_with_strategy(INTEREST_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(INTEREST_DECIMAL_PLACES);
    rounded.to_string()
}

/// Write account summaries in CSV format
///
/// # Arguments
///
/// * `accounts` - Summaries to write, already in the desired order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(BankError)` if serialization or a write failed
pub fn write_accounts_csv(
    accounts: &[AccountSummary],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let mut writer = csv::Writer::from_writer(output);

    for summary in accounts {
        writer.serialize(AccountRow::from(summary))?;
    }

    // An empty listing still gets a header row
    if accounts.is_empty() {
        writer.write_record(["id", "type", "balance", "interest"])?;
    }

    writer.flush()?;
    Ok(())
}

/// Export the registry's account listing to a CSV file at `path`
///
/// # Errors
///
/// Returns `IoError` if the file cannot be created, or `CsvError` if
/// serialization fails.
pub fn export_accounts_csv(registry: &AccountRegistry, path: &Path) -> Result<(), BankError> {
    let summaries: Vec<AccountSummary> = registry.list_accounts().collect();
    let mut file = File::create(path)?;
    write_accounts_csv(&summaries, &mut file)
}

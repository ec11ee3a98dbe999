//! Error types for the account manager
//!
//! This module defines all error types that can occur while operating on the
//! account registry or while running an interactive session.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Unknown account numbers
//! - **Balance Errors**: Insufficient funds, balance overflow
//! - **Clock Errors**: Invalid calendar dates
//! - **I/O Errors**: Session input/output and CSV export failures

use super::account::{AccountId, Amount};
use thiserror::Error;

/// Main error type for the account manager
///
/// Every variant except the I/O ones is recoverable: the session reports it
/// and keeps processing commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// No account exists with the requested number
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account: AccountId,
    },

    /// Withdrawal amount exceeds the balance
    ///
    /// The withdrawal is rejected and the balance remains unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountId,
        /// Balance at the time of the request
        balance: Amount,
        /// Requested withdrawal amount
        requested: Amount,
    },

    /// Crediting the account would overflow the balance
    #[error("Balance overflow in {operation} for account {account}")]
    BalanceOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountId,
    },

    /// Year, month and day do not form a calendar date
    #[error("Invalid date: day {day}, month {month}, year {year}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// I/O error while reading commands or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV serialization error during export
    #[error("CSV export error: {message}")]
    CsvError {
        /// Description of the CSV error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        BankError::CsvError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        BankError::AccountNotFound { account }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountId, balance: Amount, requested: Amount) -> Self {
        BankError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(operation: &str, account: AccountId) -> Self {
        BankError::BalanceOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(year: i32, month: u32, day: u32) -> Self {
        BankError::InvalidDate { year, month, day }
    }

    /// Whether the session can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BankError::IoError { .. } | BankError::CsvError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::account_not_found(
        BankError::AccountNotFound { account: 9 },
        "Account 9 not found"
    )]
    #[case::insufficient_funds(
        BankError::InsufficientFunds { account: 1, balance: 1500, requested: 2000 },
        "Insufficient funds in account 1: balance 1500, requested 2000"
    )]
    #[case::balance_overflow(
        BankError::BalanceOverflow { operation: "deposit".to_string(), account: 3 },
        "Balance overflow in deposit for account 3"
    )]
    #[case::invalid_date(
        BankError::InvalidDate { year: 2023, month: 2, day: 31 },
        "Invalid date: day 31, month 2, year 2023"
    )]
    #[case::io_error(
        BankError::IoError { message: "Broken pipe".to_string() },
        "I/O error: Broken pipe"
    )]
    fn test_error_display(#[case] error: BankError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::account_not_found(
        BankError::account_not_found(42),
        BankError::AccountNotFound { account: 42 }
    )]
    #[case::insufficient_funds(
        BankError::insufficient_funds(1, 10, 20),
        BankError::InsufficientFunds { account: 1, balance: 10, requested: 20 }
    )]
    #[case::balance_overflow(
        BankError::balance_overflow("lottery bonus", 2),
        BankError::BalanceOverflow { operation: "lottery bonus".to_string(), account: 2 }
    )]
    #[case::invalid_date(
        BankError::invalid_date(2023, 13, 1),
        BankError::InvalidDate { year: 2023, month: 13, day: 1 }
    )]
    fn test_helper_functions(#[case] result: BankError, #[case] expected: BankError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::not_found(BankError::account_not_found(1), true)]
    #[case::insufficient(BankError::insufficient_funds(1, 0, 1), true)]
    #[case::invalid_date(BankError::invalid_date(2023, 2, 30), true)]
    #[case::io(BankError::IoError { message: "closed".to_string() }, false)]
    #[case::csv(BankError::CsvError { message: "bad".to_string() }, false)]
    fn test_is_recoverable(#[case] error: BankError, #[case] expected: bool) {
        assert_eq!(error.is_recoverable(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "Broken pipe");
        let error: BankError = io_error.into();
        assert!(matches!(error, BankError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Broken pipe");
    }
}

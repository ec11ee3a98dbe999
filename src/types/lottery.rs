//! Lottery outcome types
//!
//! A lottery draw never fails for business reasons; each way it can end is an
//! informational outcome the caller reports.

use super::account::{AccountId, Amount};

/// Fixed bonus credited to the lottery winner
pub const LOTTERY_BONUS: Amount = 10_000;

/// Result of a lottery draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotteryOutcome {
    /// No special accounts exist; nothing was mutated
    NoEligibleAccounts,

    /// The draw value matched no account; nothing was mutated
    ///
    /// Only reachable when every special account holds 0 points, or when a
    /// caller supplies a draw value outside `1..=total_points`.
    NoAccountSelected,

    /// `account` won and was credited with `bonus`
    Winner {
        /// Winning account number
        account: AccountId,
        /// Bonus credited
        bonus: Amount,
        /// Balance after the bonus
        balance: Amount,
    },
}

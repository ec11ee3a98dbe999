//! System clock
//!
//! The registry's notion of "today". It never reads wall-clock time: the date
//! only moves when it is set explicitly, so interest computations are
//! reproducible.

use crate::types::BankError;
use chrono::NaiveDate;

/// Date the clock starts at unless configured otherwise
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, 5).expect("2023-05-05 is a valid date")
}

/// Explicitly settable current date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    today: NaiveDate,
}

impl SystemClock {
    pub fn new(today: NaiveDate) -> Self {
        SystemClock { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Replace the current date
    ///
    /// Nothing is recomputed; later interest computations simply see the new
    /// date.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if the parts do not form a calendar date. The
    /// current date is left unchanged.
    pub fn set(&mut self, year: i32, month: u32, day: u32) -> Result<NaiveDate, BankError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| BankError::invalid_date(year, month, day))?;
        self.today = date;
        Ok(date)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(default_start_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_date() {
        let clock = SystemClock::default();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2023, 5, 5).unwrap());
    }

    #[test]
    fn test_set_replaces_date() {
        let mut clock = SystemClock::default();
        let date = clock.set(2024, 2, 29).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_set_allows_moving_backwards() {
        let mut clock = SystemClock::default();
        clock.set(2020, 1, 1).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[rstest]
    #[case::february_31(2023, 2, 31)]
    #[case::not_leap_year(2023, 2, 29)]
    #[case::month_zero(2023, 0, 10)]
    #[case::month_thirteen(2023, 13, 1)]
    #[case::day_zero(2023, 5, 0)]
    fn test_set_rejects_invalid_dates(#[case] year: i32, #[case] month: u32, #[case] day: u32) {
        let mut clock = SystemClock::default();
        let result = clock.set(year, month, day);
        assert_eq!(result, Err(BankError::invalid_date(year, month, day)));
        assert_eq!(clock.today(), default_start_date());
    }
}

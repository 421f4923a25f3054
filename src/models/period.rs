//! Budget period representation
//!
//! A budget period is one Gregorian calendar month. Month lengths (28-31
//! days) and leap years come from chrono's calendar arithmetic.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month used as the budget window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BudgetPeriod {
    year: i32,
    month: u32,
}

impl BudgetPeriod {
    /// Create a monthly period, or `None` if `month` is not 1-12
    pub fn monthly(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Number of days in the month
    pub fn num_days(&self) -> u32 {
        self.end_date().day()
    }

    /// Every day of the month, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start_date();
        (0..self.num_days() as i64).map(move |offset| start + Duration::days(offset))
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_period() {
        let period = BudgetPeriod::monthly(2025, 1).unwrap();
        assert_eq!(period.start_date(), date(2025, 1, 1));
        assert_eq!(period.end_date(), date(2025, 1, 31));
        assert_eq!(period.to_string(), "2025-01");
    }

    #[test]
    fn test_invalid_month() {
        assert!(BudgetPeriod::monthly(2025, 13).is_none());
        assert!(BudgetPeriod::monthly(2025, 0).is_none());
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(BudgetPeriod::monthly(2024, 2).unwrap().num_days(), 29);
        assert_eq!(BudgetPeriod::monthly(2023, 2).unwrap().num_days(), 28);
        assert_eq!(BudgetPeriod::monthly(1900, 2).unwrap().num_days(), 28);
        assert_eq!(BudgetPeriod::monthly(2000, 2).unwrap().num_days(), 29);
        assert_eq!(BudgetPeriod::monthly(2024, 4).unwrap().num_days(), 30);
        assert_eq!(BudgetPeriod::monthly(2024, 12).unwrap().num_days(), 31);
    }

    #[test]
    fn test_days_iterates_whole_month() {
        let days: Vec<_> = BudgetPeriod::monthly(2024, 2).unwrap().days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&date(2024, 2, 1)));
        assert_eq!(days.last(), Some(&date(2024, 2, 29)));
    }

    #[test]
    fn test_contains() {
        let period = BudgetPeriod::containing(date(2024, 2, 15));
        assert!(period.contains(date(2024, 2, 1)));
        assert!(period.contains(date(2024, 2, 29)));
        assert!(!period.contains(date(2024, 3, 1)));
        assert!(!period.contains(date(2023, 2, 15)));
    }

    #[test]
    fn test_navigation() {
        let dec = BudgetPeriod::monthly(2024, 12).unwrap();
        assert_eq!(dec.next(), BudgetPeriod::monthly(2025, 1).unwrap());
        assert_eq!(dec.end_date(), date(2024, 12, 31));
    }
}

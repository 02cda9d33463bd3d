use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{Error, Result};

/// The (month, year) pair used to filter transactions for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }
        if !(1000..=9999).contains(&year) {
            return Err(Error::InvalidYear(year));
        }
        Ok(Self { month, year })
    }

    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                month: 12,
                year: self.year - 1,
            }
        } else {
            Self {
                month: self.month - 1,
                year: self.year,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                month: 1,
                year: self.year + 1,
            }
        } else {
            Self {
                month: self.month + 1,
                year: self.year,
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(matches!(Period::new(0, 2024), Err(Error::InvalidMonth(0))));
        assert!(matches!(Period::new(13, 2024), Err(Error::InvalidMonth(13))));
        assert!(Period::new(12, 2024).is_ok());
    }

    #[test]
    fn test_new_rejects_non_four_digit_year() {
        assert!(matches!(Period::new(3, 24), Err(Error::InvalidYear(24))));
        assert!(matches!(
            Period::new(3, 10000),
            Err(Error::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_contains_matches_month_and_year() {
        let period = Period::new(3, 2024).unwrap();
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn test_previous_and_next_wrap_over_year_boundaries() {
        let january = Period::new(1, 2024).unwrap();
        assert_eq!(january.previous(), Period::new(12, 2023).unwrap());

        let december = Period::new(12, 2024).unwrap();
        assert_eq!(december.next(), Period::new(1, 2025).unwrap());

        let june = Period::new(6, 2024).unwrap();
        assert_eq!(june.previous().next(), june);
    }
}

use crate::domain::ports::Clock;
use crate::utils::error::{ProfileError, Result};
use chrono::{Datelike, Local, NaiveDate};

/// Completed years between `born` and `today`.
///
/// The age goes up on the birthday itself. Month/day are compared as a
/// tuple, so a Feb 29 birthday rolls over on Mar 1 in non-leap years.
pub fn calculate_age(born: NaiveDate, today: NaiveDate) -> Result<u32> {
    if today < born {
        return Err(ProfileError::InvalidBirthDate { born, today });
    }

    let birthday_pending = (today.month(), today.day()) < (born.month(), born.day());
    let years = today.year() - born.year() - i32::from(birthday_pending);

    Ok(years as u32)
}

/// Reads the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_around_birthday() {
        let born = date(2001, 7, 1);
        assert_eq!(calculate_age(born, date(2023, 6, 30)).unwrap(), 21);
        assert_eq!(calculate_age(born, date(2023, 7, 1)).unwrap(), 22);
        assert_eq!(calculate_age(born, date(2023, 7, 2)).unwrap(), 22);
    }

    #[test]
    fn test_age_year_boundaries() {
        let born = date(2001, 12, 31);
        assert_eq!(calculate_age(born, date(2002, 1, 1)).unwrap(), 0);
        assert_eq!(calculate_age(born, date(2002, 12, 30)).unwrap(), 0);
        assert_eq!(calculate_age(born, date(2002, 12, 31)).unwrap(), 1);
    }

    #[test]
    fn test_leap_day_birthday() {
        let born = date(2004, 2, 29);
        assert_eq!(calculate_age(born, date(2005, 2, 28)).unwrap(), 0);
        assert_eq!(calculate_age(born, date(2005, 3, 1)).unwrap(), 1);
        assert_eq!(calculate_age(born, date(2008, 2, 29)).unwrap(), 4);
    }

    #[test]
    fn test_born_today_is_zero() {
        let born = date(2020, 5, 5);
        assert_eq!(calculate_age(born, born).unwrap(), 0);
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let result = calculate_age(date(2030, 1, 1), date(2029, 12, 31));
        assert!(matches!(result, Err(ProfileError::InvalidBirthDate { .. })));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2023, 7, 1));
        assert_eq!(clock.today(), date(2023, 7, 1));
    }
}

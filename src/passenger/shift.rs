//! Work shifts.
//!
//! A [`Shift`] is a recurring work window: it begins at the same time of day on each of its
//! days and lasts for a fixed duration, possibly past midnight. A shift belongs to the day it
//! starts on, so a Friday night shift is still running early Saturday morning.

use chrono::{Datelike, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use once_cell::sync::Lazy;

use crate::error::SimError;

/// The working schedule of a passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    begin: NaiveTime,
    duration: TimeDelta,
    days: Vec<Weekday>,
}

const WEEKDAYS: [Weekday; 5] =
    [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri];

fn preset(hour: u32, hours: i64, days: &[Weekday]) -> Shift {
    Shift {
        begin: NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN),
        duration: TimeDelta::hours(hours),
        days: days.to_vec(),
    }
}

/// Office hours, 08:00 for 9 hours, Monday to Friday
pub static DEFAULT_SHIFT: Lazy<Shift> = Lazy::new(|| preset(8, 9, &WEEKDAYS));

/// 06:00 for 9 hours, Monday to Friday
pub static EARLY_SHIFT: Lazy<Shift> = Lazy::new(|| preset(6, 9, &WEEKDAYS));

/// 12:00 for 9 hours, Monday to Friday
pub static LATE_SHIFT: Lazy<Shift> = Lazy::new(|| preset(12, 9, &WEEKDAYS));

/// 19:00 for 9 hours, Monday to Friday. Crosses midnight.
pub static NIGHT_SHIFT: Lazy<Shift> = Lazy::new(|| preset(19, 9, &WEEKDAYS));

/// 08:00 for 10 hours, Saturday and Sunday
pub static WEEKEND_SHIFT: Lazy<Shift> = Lazy::new(|| preset(8, 10, &[Weekday::Sat, Weekday::Sun]));

impl Shift {
    /// Creates a shift beginning at `begin` on each of `days`, lasting `duration`.
    ///
    /// ## Errors
    /// [`SimError::InvalidShift`] if `duration` is not positive.
    pub fn new(
        begin: NaiveTime,
        duration: TimeDelta,
        days: Vec<Weekday>,
    ) -> Result<Shift, SimError> {
        if duration <= TimeDelta::zero() {
            return Err(SimError::InvalidShift(duration.num_minutes()));
        }
        Ok(Shift { begin, duration, days })
    }

    /// Looks up a named preset: `default`, `early`, `late`, `night` or `weekend`.
    pub fn preset(name: &str) -> Result<Shift, SimError> {
        let shift = match name.to_ascii_lowercase().as_str() {
            "default" | "office" => &DEFAULT_SHIFT,
            "early" => &EARLY_SHIFT,
            "late" => &LATE_SHIFT,
            "night" => &NIGHT_SHIFT,
            "weekend" => &WEEKEND_SHIFT,
            _ => return Err(SimError::UnknownShift(name.to_string())),
        };
        Ok(Shift::clone(shift))
    }

    /// Time of day the shift begins
    pub fn begin(&self) -> NaiveTime {
        self.begin
    }

    /// Length of the shift
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Days the shift begins on
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Whether `sim_time` is inside a shift.
    ///
    /// Checks the shift starting on the same day and every earlier start still covered by the
    /// duration. The start is inclusive and the end exclusive.
    pub fn is_in_shift(&self, sim_time: NaiveDateTime) -> bool {
        let lookback = self.duration.num_days().max(0) + 1;

        let mut day = sim_time.date();
        for _ in 0..=lookback {
            if self.is_workday(day.weekday()) {
                let start = day.and_time(self.begin);
                if start <= sim_time && sim_time < start + self.duration {
                    return true;
                }
            }
            day = match day.pred_opt() {
                Some(prev) => prev,
                None => break,
            };
        }
        false
    }

    fn is_workday(&self, weekday: Weekday) -> bool {
        self.days.contains(&weekday)
    }
}

impl Default for Shift {
    fn default() -> Self {
        Shift::clone(&DEFAULT_SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        // 2024-11-18 is a Monday
        NaiveDate::from_ymd_opt(2024, 11, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid test time")
    }

    fn tue(hour: u32, minute: u32) -> NaiveDateTime {
        at(19, hour, minute)
    }

    fn non_zero_minutes_shift() -> Shift {
        Shift::new(
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            TimeDelta::hours(9),
            WEEKDAYS.to_vec(),
        )
        .unwrap()
    }

    #[test]
    fn office_shift() {
        let office = DEFAULT_SHIFT.clone();
        assert!(office.is_in_shift(tue(10, 0)), "inside the shift");
        assert!(!office.is_in_shift(at(23, 10, 0)), "right time on the wrong day");
        assert!(!office.is_in_shift(tue(6, 0)), "before the shift");
        assert!(!office.is_in_shift(tue(21, 0)), "after the shift");
        assert!(office.is_in_shift(tue(8, 0)), "start is inclusive");
        assert!(!office.is_in_shift(tue(17, 0)), "end is exclusive");
    }

    #[test]
    fn shift_with_minutes() {
        let shift = non_zero_minutes_shift();
        assert!(!shift.is_in_shift(tue(6, 0)), "before the shift within the start hour");
        assert!(shift.is_in_shift(tue(6, 30)));
        assert!(shift.is_in_shift(tue(15, 29)));
        assert!(!shift.is_in_shift(tue(15, 31)), "after the shift within the end hour");
    }

    #[test]
    fn shift_spanning_midnight() {
        let night = NIGHT_SHIFT.clone();
        assert!(night.is_in_shift(at(20, 3, 0)), "after midnight, continuing Tuesday's shift");
        assert!(night.is_in_shift(tue(21, 0)), "before midnight");
        assert!(night.is_in_shift(at(23, 3, 0)), "Friday's shift running into Saturday");
        assert!(!night.is_in_shift(tue(18, 0)), "before the shift");
        assert!(!night.is_in_shift(at(18, 3, 0)), "Monday morning, no Sunday shift");
        assert!(!night.is_in_shift(at(20, 4, 0)), "end is exclusive");
    }

    #[test]
    fn weekend_shift() {
        let weekend = WEEKEND_SHIFT.clone();
        assert!(weekend.is_in_shift(at(23, 10, 0)));
        assert!(weekend.is_in_shift(at(24, 17, 59)));
        assert!(!weekend.is_in_shift(tue(10, 0)));
    }

    #[test]
    fn shift_longer_than_a_day() {
        let shift = Shift::new(
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            TimeDelta::hours(36),
            vec![Weekday::Mon],
        )
        .unwrap();
        assert!(shift.is_in_shift(at(18, 13, 0)));
        assert!(shift.is_in_shift(at(19, 23, 0)));
        assert!(!shift.is_in_shift(at(20, 0, 0)));
    }

    #[test]
    fn shift_without_days_never_works() {
        let never = Shift::new(NaiveTime::MIN, TimeDelta::hours(8), Vec::new()).unwrap();
        assert!(!never.is_in_shift(tue(4, 0)));
    }

    #[test]
    fn invalid_shifts() {
        assert_eq!(
            Shift::new(NaiveTime::MIN, TimeDelta::zero(), WEEKDAYS.to_vec()),
            Err(SimError::InvalidShift(0))
        );
        assert_eq!(Shift::preset("lunch"), Err(SimError::UnknownShift("lunch".to_string())));
        assert_eq!(Shift::preset("Night"), Ok(NIGHT_SHIFT.clone()));
    }
}

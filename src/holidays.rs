//! Public holiday calendars.
//!
//! Only the Ukrainian calendar is bundled. Dates follow the statutory list,
//! including the 2023/2024 reform that moved Christmas to 25 December and
//! shifted Victory Day, Statehood Day and Defenders' Day.

use chrono::{Datelike, Days, Duration, NaiveDate};

use crate::error::{AssistantError, HandlerError, HandlerResult, Result};

/// Something that knows which days are public holidays.
pub trait HolidayCalendar: Send + Sync {
    /// Name of the holiday on `date`, if any. Several holidays on one day are
    /// joined with `"; "`.
    fn holiday_on(&self, date: NaiveDate) -> Option<String>;

    /// Every holiday in the half-open range `[start, start + days)`.
    ///
    /// A range ending past the last representable date is a value error.
    fn holidays_between(
        &self,
        start: NaiveDate,
        days: u32,
    ) -> HandlerResult<Vec<(NaiveDate, String)>> {
        if start.checked_add_days(Days::new(u64::from(days))).is_none() {
            return Err(HandlerError::invalid_value(format!(
                "{days} days from {start} is out of date range"
            )));
        }
        Ok(start
            .iter_days()
            .take(days as usize)
            .filter_map(|date| self.holiday_on(date).map(|name| (date, name)))
            .collect())
    }
}

/// Returns the calendar for an ISO country code.
pub fn calendar_for(country: &str) -> Result<Box<dyn HolidayCalendar>> {
    match country.to_uppercase().as_str() {
        "UA" => Ok(Box::new(UkrainianCalendar)),
        other => Err(AssistantError::config(format!(
            "Unsupported holiday calendar '{other}'. Supported: UA"
        ))),
    }
}

/// Orthodox Easter Sunday (Gregorian date), via the Julian computus.
///
/// Valid for 1900..=2099, where the Julian calendar lags by 13 days.
pub fn orthodox_easter(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    let julian = NaiveDate::from_ymd_opt(year, month as u32, day as u32)?;
    Some(julian + Duration::days(13))
}

/// Ukrainian public holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct UkrainianCalendar;

impl UkrainianCalendar {
    fn fixed(year: i32, month: u32, day: u32) -> Vec<&'static str> {
        let mut names = Vec::new();
        match (month, day) {
            (1, 1) => names.push("New Year's Day"),
            (1, 7) if year <= 2023 => names.push("Christmas Day (Julian calendar)"),
            (3, 8) => names.push("International Women's Day"),
            (5, 1) => names.push("Labour Day"),
            (5, 2) if year <= 2017 => names.push("Labour Day"),
            (5, 8) if year >= 2024 => {
                names.push("Day of Remembrance and Victory over Nazism in World War II")
            }
            (5, 9) if year <= 2023 => names.push("Victory Day"),
            (6, 28) => names.push("Constitution Day"),
            (7, 28) if (2022..=2023).contains(&year) => names.push("Statehood Day"),
            (7, 15) if year >= 2024 => names.push("Statehood Day"),
            (8, 24) => names.push("Independence Day"),
            (10, 14) if (2015..=2022).contains(&year) => names.push("Defenders of Ukraine Day"),
            (10, 1) if year >= 2023 => names.push("Defenders of Ukraine Day"),
            (12, 25) if year >= 2017 => names.push("Christmas Day"),
            _ => {}
        }
        names
    }
}

impl HolidayCalendar for UkrainianCalendar {
    fn holiday_on(&self, date: NaiveDate) -> Option<String> {
        let mut names = Self::fixed(date.year(), date.month(), date.day());

        if let Some(easter) = orthodox_easter(date.year()) {
            if date == easter {
                names.push("Easter Sunday (Orthodox)");
            } else if date == easter + Duration::days(49) {
                names.push("Holy Trinity Day (Orthodox)");
            }
        }

        if names.is_empty() {
            None
        } else {
            Some(names.join("; "))
        }
    }
}

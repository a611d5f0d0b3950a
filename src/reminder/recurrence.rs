use chrono::{Datelike, NaiveDate};

/// Next yearly occurrence of `anchor`'s month/day that is not before `today`.
///
/// Feb 29 clamps to Feb 28 in years without one. The following-year date is
/// resolved from the anchor again, so leap years get Feb 29 back.
pub fn next_occurrence(anchor: NaiveDate, today: NaiveDate) -> NaiveDate {
    let (month, day) = (anchor.month(), anchor.day());
    let candidate = on_month_day(today.year(), month, day);
    if candidate < today {
        on_month_day(today.year() + 1, month, day)
    } else {
        candidate
    }
}

/// `month`/`day` in `year`, clamping the day to the month's length.
pub fn on_month_day(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 31,
    }
}

/// Whether a yearly `month`/`day` trigger fires on `date`.
pub fn fires_on(month: u32, day: u32, date: NaiveDate) -> bool {
    on_month_day(date.year(), month, day) == date
}

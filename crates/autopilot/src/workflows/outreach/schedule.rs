use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Advance `from` by `business_days` weekdays, skipping Saturdays and
/// Sundays. With a positive offset the result is always a weekday strictly
/// after `from`.
pub fn add_business_days(from: NaiveDate, business_days: u32) -> NaiveDate {
    let mut date = from;
    let mut remaining = business_days;
    while remaining > 0 {
        date += Duration::days(1);
        if !is_weekend(date) {
            remaining -= 1;
        }
    }
    date
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

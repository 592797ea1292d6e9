use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// Returns 00:00:00 UTC on the Monday of the week containing `now`.
///
/// The week starts on Monday: a Wednesday maps two days back and a
/// Sunday six days back, never forward.
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_back = now.weekday().num_days_from_monday() as i64;
    midnight(now.date_naive() - Duration::days(days_back))
}

/// Returns 00:00:00 UTC on day 1 of the month containing `now`.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    // Day 1 exists in every month.
    midnight(now.date_naive().with_day(1).unwrap())
}

/// Returns the first instant of the week after the one containing `now`.
pub fn next_week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    week_start(now) + Duration::days(7)
}

/// Returns the first instant of the month after the one containing `now`.
pub fn next_month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    midnight(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

//! Adjustors producing a new date-time from an existing one.
//!
//! All of them keep the clock and the time zone of their input. Dates are
//! moved in local (civil) time, so stepping over a DST transition keeps the
//! wall clock instead of shifting it by the transition.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, Month, NaiveDate, NaiveDateTime, Offset, TimeZone,
    Weekday,
};

use num_traits::FromPrimitive;

use crate::month::{days_in_month, next_month};
use crate::weekday::days_between_weekdays;

/// Interprets `naive` as local time in `tz`.
///
/// Local times that occur exactly once map to that instant. For the others
/// the offset is looked up at `naive` read as UTC, and looked up again at
/// the instant this first offset gives. The second offset wins.
///
/// * Inside a gap this moves the wall clock by the size of the gap, in a
///   direction that depends on the sign of the offsets: 02:30 in New York on
///   2015-03-08 becomes 01:30 EST, 02:30 in Berlin on 2015-03-29 becomes
///   03:30 CEST.
/// * An ambiguous time takes the offset in force at `naive` read as UTC:
///   01:30 in New York on 2015-11-01 is EDT, 02:30 in Berlin on 2015-10-25
///   is CET. Should that not reproduce `naive`, the earlier instant is used.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(a, b) => {
            let dt = reread_offset(tz, naive);
            if dt.naive_local() == naive {
                dt
            } else if a <= b {
                a
            } else {
                b
            }
        }
        LocalResult::None => reread_offset(tz, naive),
    }
}

fn reread_offset<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    let first = tz.offset_from_utc_datetime(&naive).fix().local_minus_utc();
    let shifted = naive - Duration::seconds(i64::from(first));
    let second = tz.offset_from_utc_datetime(&shifted).fix().local_minus_utc();

    tz.from_utc_datetime(&(naive - Duration::seconds(i64::from(second))))
}

/// Moves `t` by `days` calendar days, keeping its wall clock.
///
/// # Panics
///
/// Panics if the result lies outside chrono's representable range.
pub fn add_days<Tz: TimeZone>(t: &DateTime<Tz>, days: i64) -> DateTime<Tz> {
    if days == 0 {
        return t.clone();
    }

    resolve_local(&t.timezone(), t.naive_local() + Duration::days(days))
}

fn with_date<Tz: TimeZone>(t: &DateTime<Tz>, year: i32, month: Month, day: u32) -> DateTime<Tz> {
    let date = NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
        .unwrap_or_else(|| panic!("{}-{:?}-{} is not a representable date", year, month, day));

    resolve_local(&t.timezone(), date.and_time(t.naive_local().time()))
}

fn month_of<Tz: TimeZone>(t: &DateTime<Tz>) -> Month {
    Month::from_u32(t.month()).expect("chrono months are in 1..=12")
}

/// Returns `t` moved to the first day of its month.
pub fn first_day_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    with_date(t, t.year(), month_of(t), 1)
}

/// Returns `t` moved to the first day of the following month, rolling over
/// into the next year after December.
pub fn first_day_of_next_month<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let month = next_month(month_of(t));
    let year = if month == Month::January {
        t.year() + 1
    } else {
        t.year()
    };

    with_date(t, year, month, 1)
}

/// Returns `t` moved to January 1st of its year.
pub fn first_day_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    with_date(t, t.year(), Month::January, 1)
}

/// Returns `t` moved to the last day of its month.
pub fn last_day_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let month = month_of(t);
    with_date(t, t.year(), month, days_in_month(t.year(), month))
}

/// Returns `t` moved to December 31st of its year.
pub fn last_day_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    with_date(t, t.year(), Month::December, 31)
}

/// Returns the next `w` on or after `t`.
///
/// If `t` already falls on `w`, `wrap` decides between returning `t` as is
/// and moving a full week ahead. The result may be in a later month or year.
pub fn next_day_of_week<Tz: TimeZone>(t: &DateTime<Tz>, w: Weekday, wrap: bool) -> DateTime<Tz> {
    let mut days = days_between_weekdays(t.weekday(), w);
    if days == 0 && wrap {
        days = 7;
    }

    add_days(t, i64::from(days))
}

/// Returns the previous `w` on or before `t`.
///
/// If `t` already falls on `w`, `wrap` decides between returning `t` as is
/// and moving a full week back. The result may be in an earlier month or year.
pub fn prev_day_of_week<Tz: TimeZone>(t: &DateTime<Tz>, w: Weekday, wrap: bool) -> DateTime<Tz> {
    let mut days = days_between_weekdays(w, t.weekday());
    if days == 0 && wrap {
        days = 7;
    }

    add_days(t, -i64::from(days))
}

/// Returns the first `w` in the month of `t`.
pub fn first_in_month<Tz: TimeZone>(t: &DateTime<Tz>, w: Weekday) -> DateTime<Tz> {
    next_day_of_week(&first_day_of_month(t), w, false)
}

/// Returns the last `w` in the month of `t`.
pub fn last_in_month<Tz: TimeZone>(t: &DateTime<Tz>, w: Weekday) -> DateTime<Tz> {
    prev_day_of_week(&last_day_of_month(t), w, false)
}

/// Returns the `n`th `w` of the month of `t`.
///
/// A positive `n` counts forward from the first day of the month, a negative
/// one backward from the last day, so `-1` is the last `w` of the month.
/// `0` returns `t` unchanged. Large values of `n` run past the month and
/// even the year.
pub fn nth_day_of_week<Tz: TimeZone>(t: &DateTime<Tz>, w: Weekday, n: i32) -> DateTime<Tz> {
    if n == 0 {
        return t.clone();
    }

    let mut n = n;
    let mut nt;

    if n > 0 {
        nt = first_day_of_month(t);
        if nt.weekday() == w {
            n -= 1;
        }

        if n > 0 {
            nt = next_day_of_week(&nt, w, true);
            n -= 1;
        }
    } else {
        nt = last_day_of_month(t);
        if nt.weekday() == w {
            n += 1;
        }

        if n < 0 {
            nt = prev_day_of_week(&nt, w, true);
            n += 1;
        }
    }

    add_days(&nt, 7 * i64::from(n))
}

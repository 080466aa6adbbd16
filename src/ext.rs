use chrono::{DateTime, TimeZone, Weekday};

use crate::{date, time};

/// Calendar adjustors in method form.
///
/// ```
/// use chrono::{TimeZone, Utc, Weekday};
/// use timex::CalendarExt;
///
/// let t = Utc.with_ymd_and_hms(2015, 1, 1, 9, 0, 0).unwrap();
/// assert_eq!(
///     t.nth_day_of_week(Weekday::Mon, 3),
///     Utc.with_ymd_and_hms(2015, 1, 19, 9, 0, 0).unwrap()
/// );
/// ```
pub trait CalendarExt: Sized {
    fn first_day_of_month(&self) -> Self;
    fn first_day_of_next_month(&self) -> Self;
    fn first_day_of_year(&self) -> Self;
    fn last_day_of_month(&self) -> Self;
    fn last_day_of_year(&self) -> Self;
    fn first_in_month(&self, w: Weekday) -> Self;
    fn last_in_month(&self, w: Weekday) -> Self;
    fn next_day_of_week(&self, w: Weekday, wrap: bool) -> Self;
    fn prev_day_of_week(&self, w: Weekday, wrap: bool) -> Self;
    fn nth_day_of_week(&self, w: Weekday, n: i32) -> Self;
    fn beginning_of_day(&self) -> Self;
    fn end_of_day(&self) -> Self;
}

impl<Tz: TimeZone> CalendarExt for DateTime<Tz> {
    fn first_day_of_month(&self) -> Self {
        date::first_day_of_month(self)
    }

    fn first_day_of_next_month(&self) -> Self {
        date::first_day_of_next_month(self)
    }

    fn first_day_of_year(&self) -> Self {
        date::first_day_of_year(self)
    }

    fn last_day_of_month(&self) -> Self {
        date::last_day_of_month(self)
    }

    fn last_day_of_year(&self) -> Self {
        date::last_day_of_year(self)
    }

    fn first_in_month(&self, w: Weekday) -> Self {
        date::first_in_month(self, w)
    }

    fn last_in_month(&self, w: Weekday) -> Self {
        date::last_in_month(self, w)
    }

    fn next_day_of_week(&self, w: Weekday, wrap: bool) -> Self {
        date::next_day_of_week(self, w, wrap)
    }

    fn prev_day_of_week(&self, w: Weekday, wrap: bool) -> Self {
        date::prev_day_of_week(self, w, wrap)
    }

    fn nth_day_of_week(&self, w: Weekday, n: i32) -> Self {
        date::nth_day_of_week(self, w, n)
    }

    fn beginning_of_day(&self) -> Self {
        time::beginning_of_day(self)
    }

    fn end_of_day(&self) -> Self {
        time::end_of_day(self)
    }
}

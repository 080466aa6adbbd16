//! Calendar arithmetic on top of [`chrono`].
//!
//! Every adjustor takes a `DateTime<Tz>` for any [`chrono::TimeZone`] and
//! returns a new one in the same zone, keeping the time of day unless it is
//! explicitly about the time of day (`beginning_of_day`, `end_of_day`).
//! Weekday distances are counted Sunday based, i.e. Sunday is day 0.

pub mod adjustor;
pub mod config;
pub mod date;
pub mod error;
pub mod ext;
pub mod month;
pub mod time;
pub mod weekday;
pub mod zone;

pub use adjustor::Adjustor;
pub use date::{
    add_days, first_day_of_month, first_day_of_next_month, first_day_of_year, first_in_month,
    last_day_of_month, last_day_of_year, last_in_month, next_day_of_week, nth_day_of_week,
    prev_day_of_week, resolve_local,
};
pub use error::{Error, ErrorKind, Result};
pub use ext::CalendarExt;
pub use month::{days_in_month, is_leap_year, next_month, prev_month};
pub use time::{beginning_of_day, end_of_day};
pub use weekday::{
    days_between_weekdays, next_business_weekday, next_weekday, prev_business_weekday,
    prev_weekday,
};
pub use zone::{Zone, ZoneOffset};

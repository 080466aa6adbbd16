//! A small expression language naming the calendar adjustors, so they can be
//! given on a command line or in text form, e.g. `nth:mon:3` or `end-of-day`.

use chrono::{DateTime, TimeZone, Weekday};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, char, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    sequence::{pair, preceded, separated_pair},
    IResult,
};
use std::fmt;
use std::str::FromStr;

use crate::date;
use crate::error::{Error, ErrorKind};
use crate::time;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjustor {
    FirstDayOfMonth,
    FirstDayOfNextMonth,
    FirstDayOfYear,
    LastDayOfMonth,
    LastDayOfYear,
    FirstInMonth(Weekday),
    LastInMonth(Weekday),
    NextDayOfWeek { weekday: Weekday, wrap: bool },
    PrevDayOfWeek { weekday: Weekday, wrap: bool },
    NthDayOfWeek(Weekday, i32),
    BeginningOfDay,
    EndOfDay,
}

impl Adjustor {
    pub fn apply<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> DateTime<Tz> {
        use Adjustor::*;
        match *self {
            FirstDayOfMonth => date::first_day_of_month(t),
            FirstDayOfNextMonth => date::first_day_of_next_month(t),
            FirstDayOfYear => date::first_day_of_year(t),
            LastDayOfMonth => date::last_day_of_month(t),
            LastDayOfYear => date::last_day_of_year(t),
            FirstInMonth(w) => date::first_in_month(t, w),
            LastInMonth(w) => date::last_in_month(t, w),
            NextDayOfWeek { weekday, wrap } => date::next_day_of_week(t, weekday, wrap),
            PrevDayOfWeek { weekday, wrap } => date::prev_day_of_week(t, weekday, wrap),
            NthDayOfWeek(w, n) => date::nth_day_of_week(t, w, n),
            BeginningOfDay => time::beginning_of_day(t),
            EndOfDay => time::end_of_day(t),
        }
    }

    /// Applies `adjustors` one after the other, starting at `t`.
    pub fn apply_all<'a, Tz, I>(adjustors: I, t: &DateTime<Tz>) -> DateTime<Tz>
    where
        Tz: TimeZone,
        I: IntoIterator<Item = &'a Adjustor>,
    {
        Self::apply_each(adjustors, t, |_, _| {})
    }

    /// Like [`Adjustor::apply_all`], but calls `step` with every adjustor and
    /// the date-time it produced.
    pub fn apply_each<'a, Tz, I, F>(adjustors: I, t: &DateTime<Tz>, mut step: F) -> DateTime<Tz>
    where
        Tz: TimeZone,
        I: IntoIterator<Item = &'a Adjustor>,
        F: FnMut(&Adjustor, &DateTime<Tz>),
    {
        adjustors.into_iter().fold(t.clone(), |current, adjustor| {
            let next = adjustor.apply(&current);
            log::trace!(
                "{}: {} -> {}",
                adjustor,
                current.naive_local(),
                next.naive_local()
            );
            step(adjustor, &next);
            next
        })
    }
}

fn weekday(input: &str) -> IResult<&str, Weekday> {
    map_res(alpha1, Weekday::from_str)(input)
}

fn signed_count(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i32>()
    })(input)
}

fn weekday_and_wrap(input: &str) -> IResult<&str, (Weekday, bool)> {
    pair(weekday, map(opt(tag(":wrap")), |flag| flag.is_some()))(input)
}

fn adjustor(input: &str) -> IResult<&str, Adjustor> {
    use Adjustor::*;
    alt((
        value(FirstDayOfMonth, tag("first-day-of-month")),
        value(FirstDayOfNextMonth, tag("first-day-of-next-month")),
        value(FirstDayOfYear, tag("first-day-of-year")),
        value(LastDayOfMonth, tag("last-day-of-month")),
        value(LastDayOfYear, tag("last-day-of-year")),
        map(preceded(tag("first-in-month:"), weekday), FirstInMonth),
        map(preceded(tag("last-in-month:"), weekday), LastInMonth),
        map(preceded(tag("next:"), weekday_and_wrap), |(weekday, wrap)| {
            NextDayOfWeek { weekday, wrap }
        }),
        map(preceded(tag("prev:"), weekday_and_wrap), |(weekday, wrap)| {
            PrevDayOfWeek { weekday, wrap }
        }),
        map(
            preceded(tag("nth:"), separated_pair(weekday, char(':'), signed_count)),
            |(w, n)| NthDayOfWeek(w, n),
        ),
        value(BeginningOfDay, tag("beginning-of-day")),
        value(EndOfDay, tag("end-of-day")),
    ))(input)
}

impl FromStr for Adjustor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.trim().to_lowercase();

        let parsed = all_consuming(adjustor)(lowercase.as_str())
            .map(|(_, adj)| adj)
            .map_err(|err| {
                Error::from(err).with_msg(&format!("'{}' is not a valid adjustor", s))
            });
        parsed
    }
}

fn short_name(w: Weekday) -> String {
    w.to_string().to_lowercase()
}

fn wrap_suffix(wrap: bool) -> &'static str {
    if wrap {
        ":wrap"
    } else {
        ""
    }
}

impl fmt::Display for Adjustor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Adjustor::*;
        match *self {
            FirstDayOfMonth => write!(f, "first-day-of-month"),
            FirstDayOfNextMonth => write!(f, "first-day-of-next-month"),
            FirstDayOfYear => write!(f, "first-day-of-year"),
            LastDayOfMonth => write!(f, "last-day-of-month"),
            LastDayOfYear => write!(f, "last-day-of-year"),
            FirstInMonth(w) => write!(f, "first-in-month:{}", short_name(w)),
            LastInMonth(w) => write!(f, "last-in-month:{}", short_name(w)),
            NextDayOfWeek { weekday, wrap } => {
                write!(f, "next:{}{}", short_name(weekday), wrap_suffix(wrap))
            }
            PrevDayOfWeek { weekday, wrap } => {
                write!(f, "prev:{}{}", short_name(weekday), wrap_suffix(wrap))
            }
            NthDayOfWeek(w, n) => write!(f, "nth:{}:{}", short_name(w), n),
            BeginningOfDay => write!(f, "beginning-of-day"),
            EndOfDay => write!(f, "end-of-day"),
        }
    }
}

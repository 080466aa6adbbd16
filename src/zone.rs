use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::{OffsetComponents, OffsetName};
use nom::{
    branch::alt,
    bytes::complete::take_while_m_n,
    character::complete::{char, one_of},
    combinator::{all_consuming, map_opt, map_res, opt},
    sequence::tuple,
    IResult,
};
use serde_with::DeserializeFromStr;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::date::resolve_local;
use crate::error::{Error, ErrorKind, Result};

/// The offset of a [`Zone`] at some point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneOffset {
    zone: Zone,
    pub utc_offset_secs: i32,
    pub dst_offset_secs: i32,
    pub id: String,
    pub name: Option<String>,
}

impl Offset for ZoneOffset {
    fn fix(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs + self.dst_offset_secs)
            .expect("Seconds should be in range")
    }
}

impl Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or(self.id.as_str()))
    }
}

/// A time zone as it can be given by a user: the system's local time, an
/// IANA zone or a fixed offset from UTC.
#[derive(Clone, Debug, Default, DeserializeFromStr, PartialEq)]
pub enum Zone {
    #[default]
    Local,
    Iana(chrono_tz::Tz),
    Fixed(FixedOffset),
}

impl Zone {
    const LOCAL_ID: &'static str = "Localtime";

    pub fn utc() -> Self {
        Self::Iana(chrono_tz::UTC)
    }

    pub fn id(&self) -> String {
        match self {
            Zone::Local => Self::LOCAL_ID.to_owned(),
            Zone::Iana(tz) => tz.name().to_owned(),
            Zone::Fixed(offset) => offset.to_string(),
        }
    }

    /// Reads `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM:SS[.f]` as a wall
    /// clock time in this zone. Gaps and overlaps follow [`resolve_local`].
    pub fn parse_local(&self, at: &str) -> Result<DateTime<Zone>> {
        let naive = match NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M:%S%.f") {
            Ok(dt) => dt,
            Err(_) => NaiveDate::parse_from_str(at, "%Y-%m-%d")?
                .and_hms_opt(0, 0, 0)
                .expect("midnight is always a valid time"),
        };

        Ok(resolve_local(self, naive))
    }

    fn local_offset(&self, offset: FixedOffset) -> ZoneOffset {
        ZoneOffset {
            zone: self.clone(),
            utc_offset_secs: offset.local_minus_utc(),
            dst_offset_secs: 0,
            id: Self::LOCAL_ID.to_owned(),
            name: None,
        }
    }

    fn iana_offset(&self, offset: &<chrono_tz::Tz as TimeZone>::Offset) -> ZoneOffset {
        ZoneOffset {
            zone: self.clone(),
            utc_offset_secs: offset.base_utc_offset().num_seconds() as i32,
            dst_offset_secs: offset.dst_offset().num_seconds() as i32,
            id: offset.tz_id().to_owned(),
            name: Some(offset.abbreviation().to_owned()),
        }
    }

    fn fixed_offset(&self, offset: FixedOffset) -> ZoneOffset {
        ZoneOffset {
            zone: self.clone(),
            utc_offset_secs: offset.local_minus_utc(),
            dst_offset_secs: 0,
            id: offset.to_string(),
            name: None,
        }
    }
}

impl TimeZone for Zone {
    type Offset = ZoneOffset;

    fn from_offset(offset: &Self::Offset) -> Self {
        offset.zone.clone()
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<Self::Offset> {
        match self {
            Zone::Local => chrono::Local
                .offset_from_local_date(local)
                .map(|offs| self.local_offset(offs)),
            Zone::Iana(tz) => tz
                .offset_from_local_date(local)
                .map(|offs| self.iana_offset(&offs)),
            Zone::Fixed(offset) => LocalResult::Single(self.fixed_offset(*offset)),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<Self::Offset> {
        match self {
            Zone::Local => chrono::Local
                .offset_from_local_datetime(local)
                .map(|offs| self.local_offset(offs)),
            Zone::Iana(tz) => tz
                .offset_from_local_datetime(local)
                .map(|offs| self.iana_offset(&offs)),
            Zone::Fixed(offset) => LocalResult::Single(self.fixed_offset(*offset)),
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> Self::Offset {
        match self {
            Zone::Local => self.local_offset(chrono::Local.offset_from_utc_date(utc)),
            Zone::Iana(tz) => self.iana_offset(&tz.offset_from_utc_date(utc)),
            Zone::Fixed(offset) => self.fixed_offset(*offset),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> Self::Offset {
        match self {
            Zone::Local => self.local_offset(chrono::Local.offset_from_utc_datetime(utc)),
            Zone::Iana(tz) => self.iana_offset(&tz.offset_from_utc_datetime(utc)),
            Zone::Fixed(offset) => self.fixed_offset(*offset),
        }
    }
}

fn two_digits(input: &str) -> IResult<&str, i32> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), |s: &str| {
        s.parse::<i32>()
    })(input)
}

/// `Z`, `+HH:MM` or `-HHMM`
fn utc_offset(input: &str) -> IResult<&str, FixedOffset> {
    alt((
        map_opt(one_of("zZ"), |_| FixedOffset::east_opt(0)),
        map_opt(
            tuple((one_of("+-"), two_digits, opt(char(':')), two_digits)),
            |(sign, hours, _, minutes)| {
                if minutes >= 60 {
                    return None;
                }
                let secs = hours * 3600 + minutes * 60;
                FixedOffset::east_opt(if sign == '-' { -secs } else { secs })
            },
        ),
    ))(input)
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowercase = s.to_lowercase();

        if matches!(lowercase.as_str(), "localtime" | "local") {
            Ok(Zone::Local)
        } else if let Ok(tz) = s.parse::<chrono_tz::Tz>() {
            Ok(Zone::Iana(tz))
        } else if let Ok((_, offset)) = all_consuming(utc_offset)(s) {
            Ok(Zone::Fixed(offset))
        } else {
            Err(Error::new(
                ErrorKind::ZoneParse,
                &format!("Timezone '{}' not recognized", s),
            ))
        }
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

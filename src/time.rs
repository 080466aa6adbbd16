use chrono::{DateTime, Duration, TimeZone};

use crate::date::{add_days, resolve_local};

/// Returns midnight at the start of the day of `t`, in the zone of `t`.
///
/// On days whose midnight falls into a DST gap the result follows
/// [`resolve_local`]. It may then lie on the previous calendar day, e.g.
/// 2018-11-03 23:00 -03 for 2018-11-04 in America/Sao_Paulo.
pub fn beginning_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let midnight = t
        .naive_local()
        .date()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time");

    resolve_local(&t.timezone(), midnight)
}

/// Returns the last full second of the day of `t`, i.e. one second before
/// the following midnight. The sub-second fraction is zero.
pub fn end_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    beginning_of_day(&add_days(t, 1)) - Duration::seconds(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::tests::at;
    use chrono::{FixedOffset, Local, Offset, Timelike, Utc};
    use chrono_tz::America::{Chicago, Los_Angeles, Sao_Paulo};

    #[test]
    fn beginning_of_day_keeps_zone() {
        let t = at(&Utc, (2015, 1, 12), (12, 9, 34));
        let got = beginning_of_day(&t);
        assert_eq!(got, at(&Utc, (2015, 1, 12), (0, 0, 0)));

        let t = at(&Local, (1999, 7, 5), (22, 19, 3));
        let got = beginning_of_day(&t);
        assert_eq!(got, at(&Local, (1999, 7, 5), (0, 0, 0)));
        assert_eq!(got.offset().fix(), t.offset().fix());

        let t = at(&Chicago, (2034, 12, 31), (23, 59, 59));
        let got = beginning_of_day(&t);
        assert_eq!(got, at(&Chicago, (2034, 12, 31), (0, 0, 0)));
        assert_eq!(got.timezone(), Chicago);
    }

    #[test]
    fn end_of_day_is_one_second_before_midnight() {
        let t = at(&Utc, (2015, 1, 12), (15, 9, 34));
        assert_eq!(end_of_day(&t), at(&Utc, (2015, 1, 12), (23, 59, 59)));

        let t = at(&Local, (1999, 7, 5), (0, 19, 3));
        assert_eq!(end_of_day(&t), at(&Local, (1999, 7, 5), (23, 59, 59)));

        let t = at(&Los_Angeles, (2034, 12, 31), (23, 59, 59));
        let got = end_of_day(&t);
        assert_eq!(got, t);
        assert_eq!(got.timezone(), Los_Angeles);
    }

    #[test]
    fn sub_seconds_are_cleared() {
        let t = at(&Utc, (2020, 2, 29), (10, 0, 0)) + Duration::microseconds(123_456);

        assert_eq!(beginning_of_day(&t).nanosecond(), 0);
        assert_eq!(end_of_day(&t).nanosecond(), 0);
        assert_eq!(end_of_day(&t), at(&Utc, (2020, 2, 29), (23, 59, 59)));
    }

    #[test]
    fn offsets_survive_for_many_zones() {
        let offsets = [-9 * 3600 - 1800, -5 * 3600, 0, 3600, 5 * 3600 + 2700, 14 * 3600];

        for secs in offsets.iter() {
            let offset = FixedOffset::east_opt(*secs).expect("valid offset");
            let t = at(&offset, (2021, 6, 15), (7, 45, 12));

            assert_eq!(*beginning_of_day(&t).offset(), offset);
            assert_eq!(*end_of_day(&t).offset(), offset);
            assert_eq!(end_of_day(&t).naive_local().date(), t.naive_local().date());
        }
    }

    #[test]
    fn end_of_day_on_dst_days() {
        // clocks go back on 2015-11-01 in Chicago, the day has 25 hours
        let t = at(&Chicago, (2015, 11, 1), (8, 0, 0));
        let begin = beginning_of_day(&t);
        let end = end_of_day(&t);

        assert_eq!(end.hour(), 23);
        assert_eq!(end.minute(), 59);
        assert_eq!(end.second(), 59);
        assert_eq!(end.timestamp() - begin.timestamp(), 25 * 3600 - 1);
    }

    #[test]
    fn beginning_of_day_without_midnight() {
        // clocks jumped from 00:00 to 01:00 on 2018-11-04 in Sao Paulo
        let t = at(&Sao_Paulo, (2018, 11, 4), (12, 0, 0));
        let got = beginning_of_day(&t);

        assert_eq!(got, at(&Sao_Paulo, (2018, 11, 3), (23, 0, 0)));
        assert_eq!(got.offset().fix().local_minus_utc(), -3 * 3600);
        assert_eq!(got.timezone(), Sao_Paulo);
    }
}

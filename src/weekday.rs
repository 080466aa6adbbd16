use chrono::Weekday;

/// Returns the number of days walking forward from `w1` to `w2`.
///
/// The order of the arguments matters: from Tuesday to Wednesday is 1 day,
/// from Wednesday to Tuesday is 6 days. The result is always in `0..=6`.
pub fn days_between_weekdays(w1: Weekday, w2: Weekday) -> u32 {
    let (from, to) = (w1.num_days_from_sunday(), w2.num_days_from_sunday());

    if from > to {
        // Sunday based, hence the +1 to get past Saturday
        6 - from + to + 1
    } else {
        to - from
    }
}

/// Returns the weekday after `w`, wrapping from Saturday to Sunday.
pub fn next_weekday(w: Weekday) -> Weekday {
    match w {
        Weekday::Sat => Weekday::Sun,
        _ => w.succ(),
    }
}

/// Returns the weekday before `w`, wrapping from Sunday to Saturday.
pub fn prev_weekday(w: Weekday) -> Weekday {
    match w {
        Weekday::Sun => Weekday::Sat,
        _ => w.pred(),
    }
}

/// Returns the business day following `w` in a Monday to Friday work week.
/// Friday, Saturday and Sunday all move on to Monday.
pub fn next_business_weekday(w: Weekday) -> Weekday {
    match w {
        Weekday::Fri | Weekday::Sat | Weekday::Sun => Weekday::Mon,
        _ => next_weekday(w),
    }
}

/// Returns the business day preceding `w` in a Monday to Friday work week.
/// Saturday, Sunday and Monday all fall back to Friday.
pub fn prev_business_weekday(w: Weekday) -> Weekday {
    match w {
        Weekday::Sat | Weekday::Sun | Weekday::Mon => Weekday::Fri,
        _ => prev_weekday(w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Weekday::*;

    const ALL: [Weekday; 7] = [Sun, Mon, Tue, Wed, Thu, Fri, Sat];

    #[test]
    fn days_between() {
        let cases = [
            (Sun, Sun, 0),
            (Sun, Mon, 1),
            (Sun, Tue, 2),
            (Sun, Wed, 3),
            (Sun, Thu, 4),
            (Sun, Fri, 5),
            (Sun, Sat, 6),
            // wrapping
            (Wed, Tue, 6),
            (Thu, Mon, 4),
            (Sat, Sun, 1),
        ];

        for (w1, w2, expected) in cases.iter() {
            assert_eq!(
                days_between_weekdays(*w1, *w2),
                *expected,
                "days_between_weekdays({}, {})",
                w1,
                w2
            );
        }
    }

    #[test]
    fn days_between_is_bounded_and_zero_on_same_day() {
        for w1 in ALL.iter() {
            assert_eq!(days_between_weekdays(*w1, *w1), 0);
            for w2 in ALL.iter() {
                let d = days_between_weekdays(*w1, *w2);
                assert!(d <= 6, "{} -> {} gave {}", w1, w2, d);
                if w1 != w2 {
                    assert_eq!(d + days_between_weekdays(*w2, *w1), 7);
                }
            }
        }
    }

    #[test]
    fn weekday_wraps() {
        assert_eq!(next_weekday(Sat), Sun);
        assert_eq!(prev_weekday(Sun), Sat);
        assert_eq!(next_weekday(Tue), Wed);
        assert_eq!(prev_weekday(Tue), Mon);

        for w in ALL.iter() {
            assert_eq!(next_weekday(prev_weekday(*w)), *w);
            assert_eq!(prev_weekday(next_weekday(*w)), *w);
        }
    }

    #[test]
    fn next_business_day() {
        let cases = [
            (Sun, Mon),
            (Mon, Tue),
            (Tue, Wed),
            (Wed, Thu),
            (Thu, Fri),
            (Fri, Mon),
            (Sat, Mon),
        ];

        for (w, expected) in cases.iter() {
            assert_eq!(next_business_weekday(*w), *expected, "from {}", w);
        }
    }

    #[test]
    fn prev_business_day() {
        let cases = [
            (Sun, Fri),
            (Mon, Fri),
            (Tue, Mon),
            (Wed, Tue),
            (Thu, Wed),
            (Fri, Thu),
            (Sat, Fri),
        ];

        for (w, expected) in cases.iter() {
            assert_eq!(prev_business_weekday(*w), *expected, "from {}", w);
        }
    }
}

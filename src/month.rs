use chrono::Month;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the month after `m`, wrapping from December to January.
pub fn next_month(m: Month) -> Month {
    match m {
        Month::December => Month::January,
        _ => m.succ(),
    }
}

/// Returns the month before `m`, wrapping from January to December.
pub fn prev_month(m: Month) -> Month {
    match m {
        Month::January => Month::December,
        _ => m.pred(),
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days of `month` in `year`.
pub fn days_in_month(year: i32, month: Month) -> u32 {
    if month == Month::February && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month.number_from_month() as usize - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    const NON_LEAP_YEAR: i32 = 2015;
    const LEAP_YEAR: i32 = 2016;

    const ALL: [Month; 12] = [
        January, February, March, April, May, June, July, August, September, October, November,
        December,
    ];

    #[test]
    fn month_lengths() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

        for (month, days) in ALL.iter().zip(expected.iter()) {
            assert_eq!(
                days_in_month(NON_LEAP_YEAR, *month),
                *days,
                "{:?} {}",
                month,
                NON_LEAP_YEAR
            );

            let leap_days = if *month == February { 29 } else { *days };
            assert_eq!(
                days_in_month(LEAP_YEAR, *month),
                leap_days,
                "{:?} {}",
                month,
                LEAP_YEAR
            );
        }
    }

    #[test]
    fn leap_years() {
        let cases = [
            (1900, false),
            (2000, true),
            (2012, true),
            (2015, false),
            (2016, true),
            (2100, false),
        ];

        for (year, expected) in cases.iter() {
            assert_eq!(is_leap_year(*year), *expected, "year {}", year);
        }
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(next_month(December), January);
        assert_eq!(prev_month(January), December);
        assert_eq!(next_month(June), July);
        assert_eq!(prev_month(June), May);

        for m in ALL.iter() {
            assert_eq!(next_month(prev_month(*m)), *m);
            assert_eq!(prev_month(next_month(*m)), *m);
        }
    }
}

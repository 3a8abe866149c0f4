use chrono::prelude::*;

pub const MILLIS_PER_MINUTE: i64 = 1000 * 60;
pub const MILLIS_PER_HOUR: i64 = MILLIS_PER_MINUTE * 60;
pub const MILLIS_PER_DAY: i64 = MILLIS_PER_HOUR * 24;

// Weekday tables are indexed with Sunday = 0
pub const WEEKDAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
// month: January -> 0
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    match MONTH_NAMES.get(month as usize) {
        Some(name) => name,
        None => "", // maybe use unreachable ?
    }
}

pub fn is_valid_date(datestr: &str) -> anyhow::Result<(i32, u32, u32)> {
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = dates[0].parse::<i32>();
    let month = dates[1].parse::<u32>();
    let day = dates[2].parse::<u32>();

    let (year, month, day) = match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(anyhow::Error::msg(datestr.to_string())),
    };

    if !(1970..=2100).contains(&year) || month < 1 || month > 12 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    if day < 1 || day > month_length(year, month) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    Ok((year, month, day))
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn month_length(year: i32, month: u32) -> u32 {
    match month - 1 {
        0 => 31,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        2 => 31,
        3 => 30,
        4 => 31,
        5 => 30,
        6 => 31,
        7 => 31,
        8 => 30,
        9 => 31,
        10 => 30,
        11 => 31,
        _ => panic!("Invalid month"),
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Wall-clock `HH:MM` for a millisecond instant.
pub fn format_clock(ts: i64) -> String {
    let datetime = NaiveDateTime::from_timestamp(ts.div_euclid(1000), 0);
    format!("{:02}:{:02}", datetime.hour(), datetime.minute())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            "2020-2-09",
        ];

        for date in &valid_dates {
            assert!(is_valid_date(date).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2020-2-30",
            "2021-2-29",
            "2020-0-1",
            "2020-1-0",
            "1969-1-1",
            "first of may",
        ];

        for date in &invalid_dates {
            assert!(is_valid_date(date).is_err());
        }
    }

    #[test]
    fn month_lengths_respect_leap_years() {
        assert_eq!(month_length(2020, 2), 29);
        assert_eq!(month_length(2021, 2), 28);
        assert_eq!(month_length(2000, 2), 29);
        assert_eq!(month_length(1900, 2), 28);
        assert_eq!(month_length(2021, 12), 31);
    }

    #[test]
    fn name_tables_start_at_sunday_and_january() {
        assert_eq!(WEEKDAY_ABBREVS[0], "Sun");
        assert_eq!(WEEKDAY_NAMES[6], "Saturday");
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "");
    }

    #[test]
    fn formats_clock_times() {
        // 1970-01-01 09:30
        assert_eq!(format_clock(9 * MILLIS_PER_HOUR + 30 * MILLIS_PER_MINUTE), "09:30");
        assert_eq!(format_clock(0), "00:00");
    }
}

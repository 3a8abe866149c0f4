use crate::date::{month_name, MONTH_NAMES, WEEKDAY_ABBREVS, WEEKDAY_NAMES};
use chrono::prelude::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Repetition frequency without its pattern payload. Used where only the
/// frequency kind is selected (form frequency picker, wire `type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of the week, indexed with Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDay(u8);

#[derive(Error, Debug)]
pub enum InvalidWeekDayError {
    #[error("Invalid weekday index: {0}, must be between 0 (Sunday) and 6 (Saturday)")]
    OutOfRange(u8),
}

impl WeekDay {
    pub fn new(index: u8) -> Result<Self, InvalidWeekDayError> {
        if index > 6 {
            return Err(InvalidWeekDayError::OutOfRange(index));
        }
        Ok(Self(index))
    }

    pub fn from_date(date: &NaiveDate) -> Self {
        Self(date.weekday().num_days_from_sunday() as u8)
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn abbrev(&self) -> &'static str {
        WEEKDAY_ABBREVS[self.0 as usize]
    }

    pub fn name(&self) -> &'static str {
        WEEKDAY_NAMES[self.0 as usize]
    }
}

impl Display for WeekDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which week of the month a monthly rule lands on. `Last` covers months
/// where a fifth occurrence of the weekday does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

#[derive(Error, Debug)]
pub enum InvalidWeekOfMonthError {
    #[error("Invalid week of month: {0}, must be between 1 and 5 (5 meaning last)")]
    OutOfRange(u8),
}

impl WeekOfMonth {
    pub fn new(week: u8) -> Result<Self, InvalidWeekOfMonthError> {
        match week {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            5 => Ok(Self::Last),
            _ => Err(InvalidWeekOfMonthError::OutOfRange(week)),
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => 5,
        }
    }

    pub fn ordinal(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyPattern {
    /// Calendar day of the month, 1-31.
    DayOfMonth(u32),
    /// E.g. the second Tuesday of every month.
    WeekDayOfMonth { weekday: WeekDay, week: WeekOfMonth },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecurrencePattern {
    Daily,
    /// The editing surface keeps `days_of_week` non-empty; an empty list is
    /// still described as a plain weekly repetition.
    Weekly { days_of_week: Vec<WeekDay> },
    Monthly(MonthlyPattern),
    /// `month` is 0-based (January = 0), `day` 1-31.
    Yearly { month: u32, day: u32 },
}

impl RecurrencePattern {
    pub fn frequency(&self) -> Frequency {
        match self {
            Self::Daily => Frequency::Daily,
            Self::Weekly { .. } => Frequency::Weekly,
            Self::Monthly(_) => Frequency::Monthly,
            Self::Yearly { .. } => Frequency::Yearly,
        }
    }
}

/// How a repetition terminates. A rule either runs forever, for a fixed
/// number of occurrences, or until an instant. Exactly one of these holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceEnd {
    Never,
    Count(u32),
    /// Millisecond instant of the last day occurrences may land on.
    Until(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceRule {
    pub pattern: RecurrencePattern,
    /// Repetition stride in units of the pattern frequency, >= 1.
    pub interval: u32,
    pub end: RecurrenceEnd,
}

impl RecurrenceRule {
    pub fn daily() -> Self {
        Self {
            pattern: RecurrencePattern::Daily,
            interval: 1,
            end: RecurrenceEnd::Never,
        }
    }

    /// Human-readable summary, e.g. `"Weekly on Mon, Wed, Fri"` or
    /// `"Every 2 months on day 15, until March 1, 2026"`.
    pub fn describe(&self) -> String {
        let mut description = match &self.pattern {
            RecurrencePattern::Daily => {
                if self.interval == 1 {
                    "Daily".to_string()
                } else {
                    format!("Every {} days", self.interval)
                }
            }
            RecurrencePattern::Weekly { days_of_week } => {
                if self.interval > 1 {
                    // day detail is dropped at this tier
                    format!("Every {} weeks", self.interval)
                } else if days_of_week.is_empty() {
                    "Weekly".to_string()
                } else {
                    format!(
                        "Weekly on {}",
                        days_of_week.iter().map(|day| day.abbrev()).join(", ")
                    )
                }
            }
            RecurrencePattern::Monthly(pattern) => {
                let base = if self.interval == 1 {
                    "Monthly".to_string()
                } else {
                    format!("Every {} months", self.interval)
                };
                match pattern {
                    MonthlyPattern::DayOfMonth(day) => format!("{} on day {}", base, day),
                    MonthlyPattern::WeekDayOfMonth { weekday, week } => format!(
                        "{} on the {} {} of the month",
                        base,
                        week.ordinal(),
                        weekday.name()
                    ),
                }
            }
            RecurrencePattern::Yearly { month, day } => {
                let base = if self.interval == 1 {
                    "Yearly".to_string()
                } else {
                    format!("Every {} years", self.interval)
                };
                format!("{} on {} {}", base, month_name(*month), day)
            }
        };

        match self.end {
            RecurrenceEnd::Never => {}
            RecurrenceEnd::Count(count) => {
                description.push_str(&format!(", {} times", count));
            }
            RecurrenceEnd::Until(until_ts) => {
                description.push_str(&format!(", until {}", format_until(until_ts)));
            }
        }

        description
    }
}

impl Display for RecurrenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

fn format_until(until_ts: i64) -> String {
    let date = NaiveDateTime::from_timestamp(until_ts.div_euclid(1000), 0).date();
    format!(
        "{} {}, {}",
        MONTH_NAMES[date.month0() as usize],
        date.day(),
        date.year()
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn weekdays(indices: &[u8]) -> Vec<WeekDay> {
        indices
            .iter()
            .map(|&index| WeekDay::new(index).unwrap())
            .collect()
    }

    #[test]
    fn rejects_out_of_range_weekdays() {
        assert!(WeekDay::new(6).is_ok());
        assert!(WeekDay::new(7).is_err());
        assert!(WeekDay::new(255).is_err());
    }

    #[test]
    fn weekday_indices_start_at_sunday() {
        assert_eq!(WeekDay::new(0).unwrap().abbrev(), "Sun");
        assert_eq!(WeekDay::new(0).unwrap().name(), "Sunday");
        assert_eq!(WeekDay::new(6).unwrap().abbrev(), "Sat");
        assert_eq!(
            WeekDay::from_date(&NaiveDate::from_ymd(2021, 8, 1)), // a Sunday
            WeekDay::new(0).unwrap()
        );
    }

    #[test]
    fn week_of_month_round_trips() {
        for week in 1..=5 {
            assert_eq!(WeekOfMonth::new(week).unwrap().index(), week);
        }
        assert!(WeekOfMonth::new(0).is_err());
        assert!(WeekOfMonth::new(6).is_err());
        assert_eq!(WeekOfMonth::new(5).unwrap().ordinal(), "last");
    }

    #[test]
    fn describes_daily_rules() {
        assert_eq!(RecurrenceRule::daily().describe(), "Daily");
        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Daily,
            interval: 3,
            end: RecurrenceEnd::Never,
        };
        assert_eq!(rule.describe(), "Every 3 days");
    }

    #[test]
    fn describes_weekly_rules() {
        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Weekly {
                days_of_week: weekdays(&[1, 3, 5]),
            },
            interval: 1,
            end: RecurrenceEnd::Never,
        };
        assert_eq!(rule.describe(), "Weekly on Mon, Wed, Fri");

        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Weekly {
                days_of_week: Vec::new(),
            },
            interval: 1,
            end: RecurrenceEnd::Never,
        };
        assert_eq!(rule.describe(), "Weekly");

        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Weekly {
                days_of_week: weekdays(&[1, 3, 5]),
            },
            interval: 2,
            end: RecurrenceEnd::Never,
        };
        assert_eq!(rule.describe(), "Every 2 weeks");
    }

    #[test]
    fn describes_monthly_rules() {
        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Monthly(MonthlyPattern::DayOfMonth(15)),
            interval: 2,
            end: RecurrenceEnd::Never,
        };
        assert_eq!(rule.describe(), "Every 2 months on day 15");

        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Monthly(MonthlyPattern::WeekDayOfMonth {
                weekday: WeekDay::new(2).unwrap(),
                week: WeekOfMonth::Second,
            }),
            interval: 1,
            end: RecurrenceEnd::Never,
        };
        assert_eq!(rule.describe(), "Monthly on the second Tuesday of the month");

        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Monthly(MonthlyPattern::WeekDayOfMonth {
                weekday: WeekDay::new(5).unwrap(),
                week: WeekOfMonth::Last,
            }),
            interval: 1,
            end: RecurrenceEnd::Never,
        };
        assert_eq!(rule.describe(), "Monthly on the last Friday of the month");
    }

    #[test]
    fn describes_yearly_rules() {
        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Yearly { month: 11, day: 25 },
            interval: 1,
            end: RecurrenceEnd::Never,
        };
        assert_eq!(rule.describe(), "Yearly on December 25");

        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Yearly { month: 0, day: 1 },
            interval: 2,
            end: RecurrenceEnd::Never,
        };
        assert_eq!(rule.describe(), "Every 2 years on January 1");
    }

    #[test]
    fn describes_termination() {
        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Daily,
            interval: 1,
            end: RecurrenceEnd::Count(5),
        };
        assert_eq!(rule.describe(), "Daily, 5 times");

        let until_ts = NaiveDate::from_ymd(2026, 3, 1).and_hms(0, 0, 0).timestamp() * 1000;
        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Monthly(MonthlyPattern::DayOfMonth(1)),
            interval: 1,
            end: RecurrenceEnd::Until(until_ts),
        };
        assert_eq!(rule.describe(), "Monthly on day 1, until March 1, 2026");
    }

    #[test]
    fn display_matches_describe() {
        let rule = RecurrenceRule::daily();
        assert_eq!(rule.to_string(), rule.describe());
    }
}

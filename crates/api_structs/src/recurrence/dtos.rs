use almanac_domain::{
    Frequency, InvalidWeekDayError, InvalidWeekOfMonthError, MonthlyPattern, RecurrenceEnd,
    RecurrencePattern, RecurrenceRule, WeekDay, WeekOfMonth,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire shape of a recurrence rule. Pattern constraints are flattened into
/// optional fields keyed by `type`, and instants are epoch seconds, which is
/// what the backend speaks; the in-memory model uses milliseconds.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRuleDTO {
    #[serde(rename = "type")]
    pub freq: Frequency,
    pub interval: u32,
    pub days_of_week: Option<Vec<u8>>,
    pub day_of_month: Option<u32>,
    pub day_of_week: Option<u8>,
    pub week_of_month: Option<u8>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub count: Option<u32>,
    pub until: Option<i64>,
}

impl RecurrenceRuleDTO {
    pub fn new(rule: &RecurrenceRule) -> Self {
        let mut dto = Self {
            freq: rule.pattern.frequency(),
            interval: rule.interval,
            days_of_week: None,
            day_of_month: None,
            day_of_week: None,
            week_of_month: None,
            month: None,
            day: None,
            count: None,
            until: None,
        };

        match &rule.pattern {
            RecurrencePattern::Daily => {}
            RecurrencePattern::Weekly { days_of_week } => {
                dto.days_of_week = Some(days_of_week.iter().map(|day| day.index()).collect());
            }
            RecurrencePattern::Monthly(MonthlyPattern::DayOfMonth(day)) => {
                dto.day_of_month = Some(*day);
            }
            RecurrencePattern::Monthly(MonthlyPattern::WeekDayOfMonth { weekday, week }) => {
                dto.day_of_week = Some(weekday.index());
                dto.week_of_month = Some(week.index());
            }
            RecurrencePattern::Yearly { month, day } => {
                dto.month = Some(*month);
                dto.day = Some(*day);
            }
        }

        match rule.end {
            RecurrenceEnd::Never => {}
            RecurrenceEnd::Count(count) => dto.count = Some(count),
            RecurrenceEnd::Until(until_ts) => dto.until = Some(until_ts / 1000),
        }

        dto
    }

    pub fn into_domain(self) -> Result<RecurrenceRule, InvalidRecurrenceRuleDTO> {
        if self.interval < 1 {
            return Err(InvalidRecurrenceRuleDTO::ZeroInterval);
        }

        let pattern = match self.freq {
            Frequency::Daily => RecurrencePattern::Daily,
            Frequency::Weekly => {
                let days_of_week = self
                    .days_of_week
                    .unwrap_or_default()
                    .into_iter()
                    .map(WeekDay::new)
                    .collect::<Result<Vec<_>, _>>()?;
                RecurrencePattern::Weekly { days_of_week }
            }
            Frequency::Monthly => {
                // dayOfMonth wins when a payload carries both variants
                if let Some(day) = self.day_of_month {
                    if !(1..=31).contains(&day) {
                        return Err(InvalidRecurrenceRuleDTO::DayOutOfRange(day));
                    }
                    RecurrencePattern::Monthly(MonthlyPattern::DayOfMonth(day))
                } else {
                    match (self.day_of_week, self.week_of_month) {
                        (Some(weekday), Some(week)) => {
                            RecurrencePattern::Monthly(MonthlyPattern::WeekDayOfMonth {
                                weekday: WeekDay::new(weekday)?,
                                week: WeekOfMonth::new(week)?,
                            })
                        }
                        _ => return Err(InvalidRecurrenceRuleDTO::MissingMonthlyPattern),
                    }
                }
            }
            Frequency::Yearly => match (self.month, self.day) {
                (Some(month), Some(day)) => {
                    if month > 11 {
                        return Err(InvalidRecurrenceRuleDTO::MonthOutOfRange(month));
                    }
                    if !(1..=31).contains(&day) {
                        return Err(InvalidRecurrenceRuleDTO::DayOutOfRange(day));
                    }
                    RecurrencePattern::Yearly { month, day }
                }
                _ => return Err(InvalidRecurrenceRuleDTO::MissingYearlyPattern),
            },
        };

        let end = match (self.count, self.until) {
            (Some(_), Some(_)) => return Err(InvalidRecurrenceRuleDTO::ConflictingTermination),
            (Some(0), None) => return Err(InvalidRecurrenceRuleDTO::ZeroCount),
            (Some(count), None) => RecurrenceEnd::Count(count),
            (None, Some(until)) => RecurrenceEnd::Until(until * 1000),
            (None, None) => RecurrenceEnd::Never,
        };

        Ok(RecurrenceRule {
            pattern,
            interval: self.interval,
            end,
        })
    }
}

#[derive(Error, Debug)]
pub enum InvalidRecurrenceRuleDTO {
    #[error("Recurrence interval must be at least 1")]
    ZeroInterval,
    #[error("Occurrence count must be at least 1")]
    ZeroCount,
    #[error("Only one of `count` and `until` may be set")]
    ConflictingTermination,
    #[error("A monthly rule needs either `dayOfMonth` or `dayOfWeek` + `weekOfMonth`")]
    MissingMonthlyPattern,
    #[error("A yearly rule needs both `month` and `day`")]
    MissingYearlyPattern,
    #[error("Day out of range: {0}, must be between 1 and 31")]
    DayOutOfRange(u32),
    #[error("Month out of range: {0}, must be between 0 (January) and 11 (December)")]
    MonthOutOfRange(u32),
    #[error("{0}")]
    WeekDay(#[from] InvalidWeekDayError),
    #[error("{0}")]
    WeekOfMonth(#[from] InvalidWeekOfMonthError),
}

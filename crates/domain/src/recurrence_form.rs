use crate::date;
use crate::shared::recurrence::{
    Frequency, MonthlyPattern, RecurrenceEnd, RecurrencePattern, RecurrenceRule, WeekDay,
    WeekOfMonth,
};
use chrono::prelude::*;
use chrono::Duration;

const DEFAULT_COUNT: u32 = 10;
const DEFAULT_UNTIL_DAYS: i64 = 90;

/// Editing model behind the recurrence settings form. The form is bound to
/// the anchor date of the event being edited, which supplies the implicit
/// day-of-month / weekday / month defaults when the frequency changes.
///
/// Every mutator leaves the form holding a complete, valid rule, so
/// consumers can read off an immutable [`RecurrenceRule`] value after any
/// change. Mutators that can reject input return `false` and leave the rule
/// untouched.
#[derive(Debug, Clone)]
pub struct RecurrenceForm {
    anchor: NaiveDate,
    rule: RecurrenceRule,
}

impl RecurrenceForm {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            rule: RecurrenceRule::daily(),
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// The current rule as an immutable value.
    pub fn rule(&self) -> RecurrenceRule {
        self.rule.clone()
    }

    /// Switches frequency and re-derives the pattern defaults from the
    /// anchor date. Interval and termination are kept as-is.
    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.rule.pattern = match frequency {
            Frequency::Daily => RecurrencePattern::Daily,
            Frequency::Weekly => RecurrencePattern::Weekly {
                days_of_week: vec![WeekDay::from_date(&self.anchor)],
            },
            Frequency::Monthly => {
                RecurrencePattern::Monthly(MonthlyPattern::DayOfMonth(self.anchor.day()))
            }
            Frequency::Yearly => RecurrencePattern::Yearly {
                month: self.anchor.month0(),
                day: self.anchor.day(),
            },
        };
    }

    pub fn set_interval(&mut self, interval: u32) -> bool {
        if interval < 1 {
            return false;
        }
        self.rule.interval = interval;
        true
    }

    /// Adds or removes a weekday on a weekly rule. Removing the last
    /// remaining day is a no-op, so the weekday set can never become empty
    /// through the form.
    pub fn toggle_weekday(&mut self, day: WeekDay) -> bool {
        let days_of_week = match &mut self.rule.pattern {
            RecurrencePattern::Weekly { days_of_week } => days_of_week,
            _ => return false,
        };
        match days_of_week.iter().position(|d| *d == day) {
            Some(pos) => {
                if days_of_week.len() == 1 {
                    return false;
                }
                days_of_week.remove(pos);
            }
            None => days_of_week.push(day),
        }
        true
    }

    pub fn set_day_of_month(&mut self, day: u32) -> bool {
        if !(1..=31).contains(&day) {
            return false;
        }
        match self.rule.pattern {
            RecurrencePattern::Monthly(_) => {
                self.rule.pattern = RecurrencePattern::Monthly(MonthlyPattern::DayOfMonth(day));
                true
            }
            _ => false,
        }
    }

    pub fn set_weekday_of_month(&mut self, weekday: WeekDay, week: WeekOfMonth) -> bool {
        match self.rule.pattern {
            RecurrencePattern::Monthly(_) => {
                self.rule.pattern =
                    RecurrencePattern::Monthly(MonthlyPattern::WeekDayOfMonth { weekday, week });
                true
            }
            _ => false,
        }
    }

    pub fn set_yearly_date(&mut self, month: u32, day: u32) -> bool {
        if month > 11 || !(1..=31).contains(&day) {
            return false;
        }
        match self.rule.pattern {
            RecurrencePattern::Yearly { .. } => {
                self.rule.pattern = RecurrencePattern::Yearly { month, day };
                true
            }
            _ => false,
        }
    }

    /// Open-ended repetition. Clears any count or until bound.
    pub fn set_end_never(&mut self) {
        self.rule.end = RecurrenceEnd::Never;
    }

    /// Ends after a number of occurrences, defaulting to 10 when the form
    /// switches to count mode without a value. Clears any until bound.
    pub fn set_end_count(&mut self, count: Option<u32>) -> bool {
        let count = match count {
            Some(0) => return false,
            Some(count) => count,
            None => DEFAULT_COUNT,
        };
        self.rule.end = RecurrenceEnd::Count(count);
        true
    }

    /// Ends on a `YYYY-M-D` date, defaulting to 90 days past the anchor when
    /// the form switches to until mode without a value. Clears any count.
    pub fn set_end_until(&mut self, datestr: Option<&str>) -> bool {
        let until_date = match datestr {
            Some(datestr) => match date::is_valid_date(datestr) {
                Ok((year, month, day)) => NaiveDate::from_ymd(year, month, day),
                Err(_) => return false,
            },
            None => self.anchor + Duration::days(DEFAULT_UNTIL_DAYS),
        };
        self.rule.end = RecurrenceEnd::Until(until_date.and_hms(0, 0, 0).timestamp() * 1000);
        true
    }
}

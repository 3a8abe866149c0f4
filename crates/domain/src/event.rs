use crate::{
    shared::entity::{Entity, ID},
    shared::recurrence::RecurrenceRule,
    timespan::TimeSpan,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Event,
    Reminder,
    AllDay,
}

impl Default for EventType {
    fn default() -> Self {
        Self::Event
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: ID,
    pub title: String,
    pub start_ts: i64,
    pub end_ts: i64,
    pub event_type: EventType,
    pub location: Option<String>,
    pub description: Option<String>,
    pub recurrence: Option<RecurrenceRule>,
}

impl Entity for CalendarEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl CalendarEvent {
    /// A transient (not yet persisted) event with an empty id.
    pub fn new(title: &str, start_ts: i64, end_ts: i64) -> Self {
        Self {
            id: Default::default(),
            title: title.to_string(),
            start_ts,
            end_ts,
            event_type: Default::default(),
            location: None,
            description: None,
            recurrence: None,
        }
    }

    pub fn duration(&self) -> i64 {
        self.end_ts - self.start_ts
    }

    pub fn is_all_day(&self) -> bool {
        self.event_type == EventType::AllDay
    }

    /// The span this event occupies in the timed grid. Reminders collapse to
    /// a point at their start and a degenerate `end_ts < start_ts` is clamped
    /// to zero duration.
    pub fn layout_span(&self) -> TimeSpan {
        match self.event_type {
            EventType::Reminder => TimeSpan::new(self.start_ts, self.start_ts),
            _ => TimeSpan::new(self.start_ts, self.end_ts).clamped(),
        }
    }
}

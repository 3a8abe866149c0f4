use crate::recurrence::dtos::{InvalidRecurrenceRuleDTO, RecurrenceRuleDTO};
use almanac_domain::{CalendarEvent, EventType, RecurrenceEnd, ID};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire shape of a calendar event. `start`/`end` and the derived
/// `recurrenceStart`/`recurrenceEnd` are epoch seconds, which is what the
/// backend persists; the in-memory model uses milliseconds.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDTO {
    pub id: ID,
    pub title: String,
    pub start: i64,
    pub end: i64,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub is_all_day: bool,
    pub location: Option<String>,
    pub description: Option<String>,
    pub recurrence_rule: Option<RecurrenceRuleDTO>,
    pub recurrence_start: Option<i64>,
    pub recurrence_end: Option<i64>,
}

impl CalendarEventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        let recurrence_start = event.recurrence.as_ref().map(|_| event.start_ts / 1000);
        let recurrence_end = match event.recurrence.as_ref().map(|rule| rule.end) {
            Some(RecurrenceEnd::Until(until_ts)) => Some(until_ts / 1000),
            _ => None,
        };

        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            start: event.start_ts / 1000,
            end: event.end_ts / 1000,
            event_type: event.event_type,
            is_all_day: event.is_all_day(),
            location: event.location.clone(),
            description: event.description.clone(),
            recurrence_rule: event.recurrence.as_ref().map(RecurrenceRuleDTO::new),
            recurrence_start,
            recurrence_end,
        }
    }

    pub fn into_domain(self) -> Result<CalendarEvent, InvalidEventDTO> {
        // tolerate payloads that only set the flag
        let event_type = if self.is_all_day {
            EventType::AllDay
        } else {
            self.event_type
        };
        let recurrence = match self.recurrence_rule {
            Some(rule) => Some(rule.into_domain()?),
            None => None,
        };

        Ok(CalendarEvent {
            id: self.id,
            title: self.title,
            start_ts: self.start * 1000,
            end_ts: self.end * 1000,
            event_type,
            location: self.location,
            description: self.description,
            recurrence,
        })
    }
}

#[derive(Error, Debug)]
pub enum InvalidEventDTO {
    #[error("Invalid recurrence rule: {0}")]
    Recurrence(#[from] InvalidRecurrenceRuleDTO),
}

#[cfg(test)]
mod test {
    use super::*;
    use almanac_domain::{RecurrencePattern, RecurrenceRule};

    fn recurring_event() -> CalendarEvent {
        let mut event = CalendarEvent::new("Retro", 1_640_995_200_000, 1_640_998_800_000);
        event.id = ID::from("evt-1");
        event.recurrence = Some(RecurrenceRule {
            pattern: RecurrencePattern::Daily,
            interval: 1,
            end: RecurrenceEnd::Until(1_672_531_200_000),
        });
        event
    }

    #[test]
    fn converts_instants_to_epoch_seconds() {
        let dto = CalendarEventDTO::new(recurring_event());
        assert_eq!(dto.start, 1_640_995_200);
        assert_eq!(dto.end, 1_640_998_800);
        assert_eq!(dto.recurrence_start, Some(1_640_995_200));
        assert_eq!(dto.recurrence_end, Some(1_672_531_200));
    }

    #[test]
    fn round_trips_through_the_wire_shape() {
        let event = recurring_event();
        let json = serde_json::to_string(&CalendarEventDTO::new(event.clone())).unwrap();
        let back = serde_json::from_str::<CalendarEventDTO>(&json)
            .unwrap()
            .into_domain()
            .unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn non_recurring_events_have_no_recurrence_bounds() {
        let dto = CalendarEventDTO::new(CalendarEvent::new("Lunch", 1000, 2000));
        assert_eq!(dto.recurrence_start, None);
        assert_eq!(dto.recurrence_end, None);
        assert!(dto.recurrence_rule.is_none());
    }

    #[test]
    fn all_day_flag_forces_the_event_type() {
        let mut dto = CalendarEventDTO::new(CalendarEvent::new("Offsite", 0, 1000));
        dto.is_all_day = true;
        let event = dto.into_domain().unwrap();
        assert_eq!(event.event_type, EventType::AllDay);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(CalendarEventDTO::new(recurring_event())).unwrap();
        assert_eq!(json["type"], "event");
        assert_eq!(json["isAllDay"], false);
        assert!(json["recurrenceRule"].is_object());
        assert_eq!(json["recurrenceStart"], 1_640_995_200i64);
    }
}

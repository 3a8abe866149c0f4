use crate::date::MILLIS_PER_MINUTE;
use crate::event::CalendarEvent;
use crate::layout::{layout, PositionedEvent};
use itertools::Itertools;

/// Bucket length used when grouping concurrent events for pagination.
pub const SLOT_INTERVAL_MILLIS: i64 = 30 * MILLIS_PER_MINUTE;
/// How many events a dense slot shows per page.
pub const SLOT_PAGE_SIZE: usize = 5;
/// Shortest duration an event box renders at, so zero-duration entries stay
/// clickable.
pub const MIN_EVENT_MINUTES: i64 = 15;

/// One day's worth of events, split and positioned for rendering: all-day
/// entries stacked in a single column above the grid, timed entries with
/// their computed column geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub all_day: Vec<CalendarEvent>,
    pub timed: Vec<PositionedEvent>,
}

pub fn lay_out_day(events: Vec<CalendarEvent>) -> DayLayout {
    let (all_day, timed) = split_all_day(events);
    DayLayout {
        all_day,
        timed: layout(&timed),
    }
}

/// Splits a day's events into (all-day, timed). All-day events do not go
/// through overlap packing; they stack in one column ordered by start.
pub fn split_all_day(events: Vec<CalendarEvent>) -> (Vec<CalendarEvent>, Vec<CalendarEvent>) {
    let mut all_day = Vec::new();
    let mut timed = Vec::new();

    for event in events {
        if event.is_all_day() {
            all_day.push(event);
        } else {
            timed.push(event);
        }
    }
    all_day.sort_by_key(|event| event.start_ts);

    (all_day, timed)
}

/// Maps positioned events onto pixels. The vertical axis encodes time at a
/// fixed number of pixels per hour; the horizontal axis carries the engine's
/// percentage geometry through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    pub hour_height: f64,
}

impl Default for PixelScale {
    fn default() -> Self {
        Self { hour_height: 60.0 }
    }
}

/// Pixel box for one event: `top`/`height` in pixels below the day's start,
/// `left`/`width` as percentages of the track.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBox {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

impl PixelScale {
    pub fn event_box(&self, positioned: &PositionedEvent, day_start_ts: i64) -> EventBox {
        let pixels_per_minute = self.hour_height / 60.0;
        let span = positioned.event.layout_span();
        let start_minutes = (span.start_ts - day_start_ts) as f64 / MILLIS_PER_MINUTE as f64;
        let duration_minutes =
            std::cmp::max(span.duration() / MILLIS_PER_MINUTE, MIN_EVENT_MINUTES);

        EventBox {
            top: start_minutes * pixels_per_minute,
            height: duration_minutes as f64 * pixels_per_minute,
            left: positioned.left,
            width: positioned.width,
        }
    }
}

/// A 30-minute bucket of timed events, chunked into pages. Which page is
/// showing is view state owned by the renderer.
#[derive(Debug)]
pub struct SlotBucket<'a> {
    pub slot_start_ts: i64,
    pub pages: Vec<Vec<&'a PositionedEvent>>,
}

/// Groups positioned events by the 30-minute slot their start falls in and
/// chunks every slot into pages of `page_size`, for views that cycle through
/// crowded slots instead of squeezing all columns in. Expects the engine's
/// start-ordered output.
pub fn paginate_slots(timed: &[PositionedEvent], page_size: usize) -> Vec<SlotBucket<'_>> {
    let page_size = std::cmp::max(page_size, 1);
    let slots = timed.iter().group_by(|positioned| {
        positioned
            .event
            .layout_span()
            .start_ts
            .div_euclid(SLOT_INTERVAL_MILLIS)
    });
    slots
        .into_iter()
        .map(|(slot, group)| {
            let members = group.collect::<Vec<_>>();
            SlotBucket {
                slot_start_ts: slot * SLOT_INTERVAL_MILLIS,
                pages: members
                    .chunks(page_size)
                    .map(|page| page.to_vec())
                    .collect(),
            }
        })
        .collect()
}

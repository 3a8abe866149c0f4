pub mod date;
mod day_view;
mod event;
mod layout;
mod recurrence_form;
mod shared;
mod timespan;

pub use day_view::{
    lay_out_day, paginate_slots, split_all_day, DayLayout, EventBox, PixelScale, SlotBucket,
    MIN_EVENT_MINUTES, SLOT_INTERVAL_MILLIS, SLOT_PAGE_SIZE,
};
pub use event::{CalendarEvent, EventType};
pub use layout::{layout, PositionedEvent};
pub use recurrence_form::RecurrenceForm;
pub use shared::entity::{Entity, ID};
pub use shared::recurrence::{
    Frequency, InvalidWeekDayError, InvalidWeekOfMonthError, MonthlyPattern, RecurrenceEnd,
    RecurrencePattern, RecurrenceRule, WeekDay, WeekOfMonth,
};
pub use timespan::TimeSpan;

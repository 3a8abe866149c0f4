mod config;
mod telemetry;

use almanac_api_structs::dtos::CalendarEventDTO;
use almanac_domain::{date, lay_out_day, paginate_slots, PixelScale, SLOT_PAGE_SIZE};
use anyhow::Context;
use config::Config;
use telemetry::{get_subscriber, init_subscriber};
use tracing::{info, warn};

/// Reads a day's events from a JSON fixture and prints the geometry the
/// layout engine assigns to them. Debugging aid for the rendering layer.
fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("almanac".into(), "info".into());
    init_subscriber(subscriber);

    let config = Config::new();
    let raw = std::fs::read_to_string(&config.events_path)
        .with_context(|| format!("Unable to read events from {}", config.events_path))?;
    let dtos = serde_json::from_str::<Vec<CalendarEventDTO>>(&raw)
        .with_context(|| format!("Malformed events fixture: {}", config.events_path))?;

    let mut events = Vec::with_capacity(dtos.len());
    for dto in dtos {
        match dto.into_domain() {
            Ok(event) => events.push(event),
            Err(e) => warn!("Skipping event with invalid payload: {}", e),
        }
    }
    info!("Laying out {} events", events.len());

    let day_start_ts = events
        .iter()
        .map(|event| event.start_ts)
        .min()
        .map(|min_start| min_start - min_start.rem_euclid(date::MILLIS_PER_DAY))
        .unwrap_or(0);
    let scale = PixelScale {
        hour_height: config.hour_height,
    };
    let day = lay_out_day(events);

    for event in &day.all_day {
        println!("[all-day] {}", event.title);
    }
    for positioned in &day.timed {
        let event = &positioned.event;
        let event_box = scale.event_box(positioned, day_start_ts);
        print!(
            "{} - {}  {:<24} column {}/{}  left {:.1}%  width {:.1}%  top {:.0}px  height {:.0}px",
            date::format_clock(event.start_ts),
            date::format_clock(event.end_ts),
            event.title,
            positioned.column,
            positioned.max_columns,
            positioned.left,
            positioned.width,
            event_box.top,
            event_box.height,
        );
        match &event.recurrence {
            Some(rule) => println!("  ({})", rule.describe()),
            None => println!(),
        }
    }

    let dense_slots = paginate_slots(&day.timed, SLOT_PAGE_SIZE)
        .into_iter()
        .filter(|bucket| bucket.pages.len() > 1)
        .collect::<Vec<_>>();
    for bucket in dense_slots {
        info!(
            "Slot {} is dense: {} pages of up to {} events",
            date::format_clock(bucket.slot_start_ts),
            bucket.pages.len(),
            SLOT_PAGE_SIZE
        );
    }

    Ok(())
}

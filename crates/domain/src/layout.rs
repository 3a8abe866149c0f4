use crate::event::CalendarEvent;

/// A timed event together with its computed grid geometry. `column` is the
/// 0-based lane inside the event's cluster, `max_columns` the cluster's lane
/// count, and `width`/`left` are percentages of the track width.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEvent {
    pub event: CalendarEvent,
    pub column: usize,
    pub max_columns: usize,
    pub width: f64,
    pub left: f64,
}

/// Assigns each timed event of a day to a column so that no two events in
/// the same column overlap, using as few columns as possible per cluster of
/// concurrent events.
///
/// Events are placed in order of start, longest first on equal starts, so a
/// long event claims the leftmost lane and shorter concurrent events stack
/// to its right. Widths are uniform within a cluster: they divide the track
/// by the cluster's final column count, not the count at insertion time, so
/// a cluster never renders with mixed widths.
///
/// Total over any input: unsorted lists, arbitrary overlap, zero-duration
/// reminders and degenerate `end_ts < start_ts` spans are all accepted.
/// All-day events do not participate in the timed grid and are skipped; see
/// [`split_all_day`](crate::split_all_day). The output is in placement
/// order and identical across repeated calls on the same input.
pub fn layout(events: &[CalendarEvent]) -> Vec<PositionedEvent> {
    let mut order = (0..events.len())
        .filter(|&idx| !events[idx].is_all_day())
        .collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        let span_a = events[a].layout_span();
        let span_b = events[b].layout_span();
        span_a
            .start_ts
            .cmp(&span_b.start_ts)
            .then(span_b.duration().cmp(&span_a.duration()))
    });

    let mut positioned: Vec<PositionedEvent> = Vec::with_capacity(order.len());
    // end instant of the last event placed in each open column
    let mut columns: Vec<i64> = Vec::new();
    let mut cluster_start = 0;

    for idx in order {
        let span = events[idx].layout_span();

        // Every open column has drained before this event starts, so the
        // cluster is complete and its final column count is known.
        if !columns.is_empty() && columns.iter().all(|&end_ts| end_ts <= span.start_ts) {
            close_cluster(&mut positioned[cluster_start..], columns.len());
            cluster_start = positioned.len();
            columns.clear();
        }

        let column = match columns
            .iter()
            .position(|&end_ts| end_ts <= span.start_ts)
        {
            Some(free) => free,
            None => {
                columns.push(span.end_ts);
                columns.len() - 1
            }
        };
        columns[column] = span.end_ts;

        positioned.push(PositionedEvent {
            event: events[idx].clone(),
            column,
            max_columns: 0,
            width: 0.0,
            left: 0.0,
        });
    }
    if !columns.is_empty() {
        close_cluster(&mut positioned[cluster_start..], columns.len());
    }

    positioned
}

fn close_cluster(cluster: &mut [PositionedEvent], max_columns: usize) {
    let width = 100.0 / max_columns as f64;
    for positioned in cluster {
        positioned.max_columns = max_columns;
        positioned.width = width;
        positioned.left = positioned.column as f64 * width;
    }
}

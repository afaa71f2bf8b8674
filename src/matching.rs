use crate::error::WdayResult;
use crate::event::{Event, Frequency};
use crate::resolve::{MatchPrecision, ResolvedAnchor};
use chrono::Datelike;

/// Decide whether an event is due at the anchor's precision.
///
/// Each precision level compares only the calendar fields it names; the
/// sentinel fields synthesized by partial-token resolution never take part.
pub fn event_matches(event: &Event, anchor: &ResolvedAnchor) -> WdayResult<bool> {
    let event_date = event.calendar_date()?;
    let matched = match anchor.precision {
        MatchPrecision::Today => match event.frequency {
            Frequency::Yearly => {
                event_date.month() == anchor.date.month() && event_date.day() == anchor.date.day()
            }
            Frequency::Monthly => event_date.day() == anchor.date.day(),
        },
        MatchPrecision::Exact => event_date == anchor.date,
        MatchPrecision::MonthDay => {
            event_date.month() == anchor.date.month() && event_date.day() == anchor.date.day()
        }
        MatchPrecision::Day => event_date.day() == anchor.date.day(),
    };
    Ok(matched)
}

/// Filter a dataset against an anchor, preserving dataset order.
pub fn find_events(events: &[Event], anchor: &ResolvedAnchor) -> WdayResult<Vec<Event>> {
    let mut found = Vec::new();
    for event in events {
        if event_matches(event, anchor)? {
            found.push(event.clone());
        }
    }
    Ok(found)
}

use crate::error::{WdayError, WdayResult};
use crate::event::Event;

// Locale datasets are embedded at build time; they are trusted content and
// any defect in them is a packaging bug, not a runtime condition.
const DATA_JAJP: &str = include_str!("data/JaJP.json");
const DATA_ENUS: &str = include_str!("data/EnUS.json");

/// Raw bundled JSON document for a locale.
///
/// Unknown locales are a hard error; no fallback locale is substituted.
pub fn bundled_dataset(locale: &str) -> WdayResult<&'static str> {
    match locale {
        "JaJP" => Ok(DATA_JAJP),
        "EnUS" => Ok(DATA_ENUS),
        other => Err(WdayError::ResourceRead(other.to_string())),
    }
}

/// Deserialize a dataset document into its ordered event records.
pub fn parse_events(raw: &str) -> WdayResult<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(raw)?;
    Ok(events)
}

pub fn load_bundled_events(locale: &str) -> WdayResult<Vec<Event>> {
    parse_events(bundled_dataset(locale)?)
}

use crate::error::WdayResult;
use crate::event::Event;
use crate::locale::format_event_date;

/// Render one event block for terminal output.
///
/// The title always prints; the locale-formatted date and the description
/// are added only when descriptions were requested.
pub fn format_event_block(event: &Event, locale: &str, show_description: bool) -> WdayResult<String> {
    let mut out = String::new();
    out.push_str(&event.title);
    out.push('\n');
    if !show_description {
        return Ok(out);
    }
    out.push_str(&format_event_date(event, locale)?);
    out.push('\n');
    out.push_str(&event.description);
    out.push('\n');
    Ok(out)
}

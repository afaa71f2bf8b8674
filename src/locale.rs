use crate::error::WdayResult;
use crate::event::{Event, Frequency};
use chrono::Datelike;

/// A supported locale: dataset selection plus display-formatting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub display_name: &'static str,
}

pub const DEFAULT_LOCALE: &str = "JaJP";

pub const SUPPORTED_LOCALES: &[Locale] = &[
    Locale {
        code: "JaJP",
        display_name: "日本語",
    },
    Locale {
        code: "EnUS",
        display_name: "English(US)",
    },
];

pub fn locale_by_code(code: &str) -> Option<Locale> {
    SUPPORTED_LOCALES.iter().copied().find(|l| l.code == code)
}

/// Format an event's date for presentation in the given locale.
///
/// Yearly events render the full date; monthly events render only the
/// recurring day-of-month. Unsupported locale codes fall back to ISO forms.
pub fn format_event_date(event: &Event, locale: &str) -> WdayResult<String> {
    let date = event.calendar_date()?;
    let formatted = match event.frequency {
        Frequency::Yearly => match locale {
            "JaJP" => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
            "EnUS" => format!("{} {}, {}", month_name_en(date.month()), date.day(), date.year()),
            _ => date.format("%Y-%m-%d").to_string(),
        },
        Frequency::Monthly => match locale {
            "JaJP" => format!("毎月{}日", date.day()),
            "EnUS" => format!("Every month on the {}", date.day()),
            _ => date.format("%d").to_string(),
        },
    };
    Ok(formatted)
}

const MONTH_NAMES_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// `Datelike::month()` is always 1..=12; anything else is a caller bug and
// panics on the index rather than folding into a wrong month.
fn month_name_en(month: u32) -> &'static str {
    MONTH_NAMES_EN[(month - 1) as usize]
}

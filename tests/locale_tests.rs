use wday::display::format_event_block;
use wday::event::{Event, Frequency};
use wday::locale::{DEFAULT_LOCALE, SUPPORTED_LOCALES, format_event_date, locale_by_code};

fn event(date: &str, frequency: Frequency) -> Event {
    Event {
        id: 1,
        date: date.to_string(),
        frequency,
        title: "Pi Day".to_string(),
        description: "Celebrated on 3/14.".to_string(),
    }
}

#[test]
fn default_locale_is_supported() {
    assert!(locale_by_code(DEFAULT_LOCALE).is_some());
    assert!(locale_by_code("nope").is_none());
    assert_eq!(SUPPORTED_LOCALES.len(), 2);
}

#[test]
fn yearly_dates_format_per_locale() {
    let e = event("2000-03-14", Frequency::Yearly);
    assert_eq!(format_event_date(&e, "EnUS").unwrap(), "March 14, 2000");
    assert_eq!(format_event_date(&e, "JaJP").unwrap(), "2000年3月14日");
    assert_eq!(format_event_date(&e, "DeDE").unwrap(), "2000-03-14");
}

#[test]
fn every_month_name_formats_correctly_in_enus() {
    let expected = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    for (month, name) in (1..=12).zip(expected) {
        let e = event(&format!("2000-{month:02}-10"), Frequency::Yearly);
        assert_eq!(
            format_event_date(&e, "EnUS").unwrap(),
            format!("{name} 10, 2000")
        );
    }
}

#[test]
fn monthly_dates_format_per_locale() {
    let e = event("2000-01-22", Frequency::Monthly);
    assert_eq!(format_event_date(&e, "EnUS").unwrap(), "Every month on the 22");
    assert_eq!(format_event_date(&e, "JaJP").unwrap(), "毎月22日");
    assert_eq!(format_event_date(&e, "DeDE").unwrap(), "22");
}

#[test]
fn event_block_is_title_only_without_descriptions() {
    let e = event("2000-03-14", Frequency::Yearly);
    let block = format_event_block(&e, "EnUS", false).unwrap();
    assert_eq!(block, "Pi Day\n");
}

#[test]
fn event_block_includes_date_and_description_when_requested() {
    let e = event("2000-03-14", Frequency::Yearly);
    let block = format_event_block(&e, "EnUS", true).unwrap();
    assert_eq!(block, "Pi Day\nMarch 14, 2000\nCelebrated on 3/14.\n");
}

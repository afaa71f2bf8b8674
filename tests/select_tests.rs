use rand::SeedableRng;
use rand::rngs::StdRng;
use wday::event::{Event, Frequency};
use wday::select::select_events;

fn event(id: i64, title: &str) -> Event {
    Event {
        id,
        date: "2000-01-01".to_string(),
        frequency: Frequency::Yearly,
        title: title.to_string(),
        description: String::new(),
    }
}

#[test]
fn show_all_returns_every_event_in_order() {
    let matched = vec![event(1, "a"), event(2, "b"), event(3, "c")];
    let mut rng = StdRng::seed_from_u64(0);
    let selected = select_events(&matched, true, &mut rng);
    let titles: Vec<&str> = selected.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn random_selection_picks_exactly_one_member() {
    let matched = vec![event(1, "a"), event(2, "b"), event(3, "c")];
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selected = select_events(&matched, false, &mut rng);
        assert_eq!(selected.len(), 1);
        assert!(matched.iter().any(|e| e.id == selected[0].id));
    }
}

#[test]
fn random_selection_is_deterministic_for_a_fixed_source() {
    let matched = vec![event(1, "a"), event(2, "b"), event(3, "c")];
    let mut first = StdRng::seed_from_u64(7);
    let mut second = StdRng::seed_from_u64(7);
    assert_eq!(
        select_events(&matched, false, &mut first)[0].id,
        select_events(&matched, false, &mut second)[0].id
    );
}

#[test]
fn empty_matched_set_selects_nothing() {
    let matched: Vec<Event> = Vec::new();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(select_events(&matched, false, &mut rng).is_empty());
    assert!(select_events(&matched, true, &mut rng).is_empty());
}

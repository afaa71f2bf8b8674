use crate::event::Event;
use rand::Rng;

/// Pick the events to display from the matched set.
///
/// With `show_all` the full set comes back in dataset order; otherwise one
/// element is chosen uniformly at random from `rng`. An empty matched set
/// yields an empty selection, which is not an error.
///
/// The random source is a parameter so selection is deterministic under
/// test; the binary passes a process-lifetime `rand::rng()`.
pub fn select_events<'a, R: Rng>(
    matched: &'a [Event],
    show_all: bool,
    rng: &mut R,
) -> Vec<&'a Event> {
    if matched.is_empty() {
        return Vec::new();
    }
    if show_all {
        return matched.iter().collect();
    }
    let index = rng.random_range(0..matched.len());
    vec![&matched[index]]
}

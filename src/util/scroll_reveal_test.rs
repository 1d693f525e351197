use super::*;

#[test]
fn first_intersection_reveals() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.observe(0, true));
    assert!(tracker.is_revealed(0));
}

#[test]
fn non_intersecting_report_does_not_reveal() {
    let mut tracker = RevealTracker::default();
    assert!(!tracker.observe(3, false));
    assert!(!tracker.is_revealed(3));
    assert!(tracker.observe(3, true));
}

#[test]
fn reveal_is_one_shot_per_element() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.observe(1, true));
    assert!(!tracker.observe(1, false));
    assert!(!tracker.observe(1, true));
    assert!(tracker.is_revealed(1));
    assert_eq!(tracker.revealed_count(), 1);
}

#[test]
fn elements_are_tracked_independently() {
    let mut tracker = RevealTracker::default();
    tracker.observe(0, true);
    tracker.observe(2, true);
    assert!(!tracker.is_revealed(1));
    assert_eq!(tracker.revealed_count(), 2);
}

#[test]
fn hidden_and_revealed_styles_cover_opacity_and_transform() {
    let props = |patch: StylePatch| patch.iter().map(|(p, _)| *p).collect::<Vec<_>>();
    assert_eq!(props(HIDDEN_STYLE), vec!["opacity", "transform", "transition"]);
    assert_eq!(props(REVEALED_STYLE), vec!["opacity", "transform"]);
}

#[test]
fn selector_targets_cards_and_timeline() {
    assert_eq!(REVEAL_SELECTOR, ".glass-card, .project-card, .timeline-item");
}

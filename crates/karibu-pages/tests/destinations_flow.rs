//! End-to-end destinations search/filter flows against the recording view.

use karibu_core::dom::{Document, FilterButtonNode};
use karibu_core::event::{Event, KeyCode, KeyEvent};
use karibu_harness::Pilot;
use karibu_harness::fixtures::{destination_card_ids, destinations_document};
use karibu_pages::destinations::{DebounceConfig, DestinationsPage};
use karibu_widgets::catalog::Selection;

fn pilot() -> Pilot<DestinationsPage> {
    let page = DestinationsPage::bind(&destinations_document(), DebounceConfig::default())
        .expect("destinations page binds");
    Pilot::new(page)
}

#[test]
fn search_waits_for_the_debounce_window() {
    let mut pilot = pilot();
    pilot.event(Event::input("searchInput", "nairobi"));

    // Nothing applied yet: all cards keep their initial visibility.
    assert_eq!(pilot.view().visible_among(destination_card_ids()), 3);

    pilot.advance_ms(299);
    assert_eq!(pilot.view().visible_among(destination_card_ids()), 3);

    pilot.advance_ms(1);
    assert!(pilot.view().is_visible("card-nairobi"));
    assert!(!pilot.view().is_visible("card-mombasa"));
    assert!(!pilot.view().is_visible("card-naivasha"));
    assert_eq!(pilot.component().visible_count(), 1);
}

#[test]
fn rapid_typing_applies_once_with_the_last_value() {
    let mut pilot = pilot();
    for term in ["n", "na", "nai", "nair", "nairobi"] {
        pilot.event(Event::input("searchInput", term));
        pilot.advance_ms(100);
    }
    // 100ms after the last keystroke: still inside the window.
    assert_eq!(pilot.view().visible_among(destination_card_ids()), 3);

    pilot.advance_ms(200);
    assert_eq!(pilot.component().visible_count(), 1);
    assert!(pilot.view().is_visible("card-nairobi"));
}

#[test]
fn enter_applies_immediately_and_cancels_the_pending_window() {
    let mut pilot = pilot();
    pilot.event(Event::input("searchInput", "mombasa"));
    pilot.event(Event::Key(
        KeyEvent::new(KeyCode::Enter).with_target("searchInput"),
    ));
    assert_eq!(pilot.component().visible_count(), 1);
    assert!(pilot.view().is_visible("card-mombasa"));

    // The debounce task was cancelled; advancing produces no further ops.
    let (_, view) = pilot.parts_mut();
    view.clear_ops();
    pilot.advance_ms(1000);
    assert!(pilot.view().ops().is_empty());
}

#[test]
fn search_button_applies_immediately() {
    let mut pilot = pilot();
    pilot.event(Event::input("searchInput", "lake"));
    pilot.event(Event::click("searchBtn"));
    assert_eq!(pilot.component().visible_count(), 1);
    assert!(pilot.view().is_visible("card-naivasha"));
}

#[test]
fn region_filter_selects_only_matching_cards() {
    let mut pilot = pilot();
    pilot.event(Event::click("region-coast"));

    assert_eq!(pilot.component().visible_count(), 1);
    assert!(pilot.view().is_visible("card-mombasa"));
    assert!(!pilot.view().is_visible("card-nairobi"));
    assert!(pilot.view().is_active("region-coast"));
    assert!(!pilot.view().is_active("region-all"));
}

#[test]
fn search_and_filters_combine_with_and_semantics() {
    let mut pilot = pilot();
    pilot.event(Event::input("searchInput", "beach"));
    pilot.advance_ms(300);
    assert_eq!(pilot.component().visible_count(), 1);

    pilot.event(Event::click("type-wildlife"));
    assert_eq!(pilot.component().visible_count(), 0);
    assert!(pilot.view().is_visible("noResults"));
}

#[test]
fn no_results_indicator_clears_when_results_return() {
    let mut pilot = pilot();
    pilot.event(Event::input("searchInput", "serengeti"));
    pilot.advance_ms(300);
    assert!(pilot.view().is_visible("noResults"));

    pilot.event(Event::input("searchInput", ""));
    pilot.advance_ms(300);
    assert!(!pilot.view().is_visible("noResults"));
    assert_eq!(pilot.component().visible_count(), 3);
}

#[test]
fn filters_recompute_from_the_full_catalog() {
    let mut pilot = pilot();
    // Search hides everything but Nairobi, then a coast filter arrives:
    // the combination is evaluated against the full catalog, so clearing
    // the search must bring Mombasa back without touching the filter.
    pilot.event(Event::input("searchInput", "nairobi"));
    pilot.advance_ms(300);
    pilot.event(Event::click("region-coast"));
    assert_eq!(pilot.component().visible_count(), 0);

    pilot.event(Event::input("searchInput", ""));
    pilot.advance_ms(300);
    assert_eq!(pilot.component().visible_count(), 1);
    assert!(pilot.view().is_visible("card-mombasa"));
}

#[test]
fn reselecting_the_active_filter_changes_nothing() {
    let mut pilot = pilot();
    pilot.event(Event::click("region-coast"));
    let count = pilot.component().visible_count();

    let (_, view) = pilot.parts_mut();
    view.clear_ops();
    pilot.event(Event::click("region-coast"));
    assert!(pilot.view().ops().is_empty());
    assert_eq!(pilot.component().visible_count(), count);
}

#[test]
fn reset_restores_the_original_catalog_order_and_state() {
    let mut pilot = pilot();
    pilot.event(Event::input("searchInput", "serengeti"));
    pilot.advance_ms(300);
    pilot.event(Event::click("region-coast"));
    pilot.event(Event::click("type-beach"));

    let (page, view) = pilot.parts_mut();
    page.reset(view);

    assert_eq!(pilot.component().visible_count(), 3);
    assert_eq!(pilot.view().visible_among(destination_card_ids()), 3);
    assert!(!pilot.view().is_visible("noResults"));
    assert_eq!(pilot.view().value_of("searchInput"), "");
    assert!(pilot.view().is_active("region-all"));
    assert!(pilot.view().is_active("type-all"));
}

#[test]
fn direct_search_applies_without_a_window() {
    let mut pilot = pilot();
    let (page, view) = pilot.parts_mut();
    assert_eq!(page.search("nairobi", view), 1);
    assert!(pilot.view().is_visible("card-nairobi"));
    assert!(!pilot.view().is_visible("card-mombasa"));
}

#[test]
fn direct_filters_select_exactly_the_matching_card() {
    let mut pilot = pilot();
    let (page, view) = pilot.parts_mut();
    let count = page.apply_filters(Selection::from_attr("coast"), Selection::All, view);
    assert_eq!(count, 1);
    assert!(pilot.view().is_visible("card-mombasa"));
    assert!(!pilot.view().is_visible("card-nairobi"));
}

#[test]
fn all_all_after_any_filter_state_restores_the_catalog() {
    let mut pilot = pilot();
    let (page, view) = pilot.parts_mut();
    page.apply_filters(Selection::from_attr("coast"), Selection::from_attr("beach"), view);
    page.apply_filters(Selection::from_attr("east"), Selection::All, view);

    let count = page.apply_filters(Selection::All, Selection::All, view);
    assert_eq!(count, 3);
    assert_eq!(pilot.view().visible_among(destination_card_ids()), 3);
}

#[test]
fn missing_search_input_still_binds_the_filters() {
    let doc = Document::builder()
        .filter_group(
            "regionFilters",
            vec![
                FilterButtonNode::new("region-all", "all"),
                FilterButtonNode::new("region-coast", "coast"),
            ],
        )
        .build();
    let page = DestinationsPage::bind(&doc, DebounceConfig::default()).expect("filters bind");
    let mut pilot = Pilot::new(page);
    pilot.event(Event::click("region-coast"));
    assert!(pilot.view().is_active("region-coast"));
}

#[test]
fn empty_document_does_not_bind() {
    assert!(DestinationsPage::bind(&Document::default(), DebounceConfig::default()).is_none());
}

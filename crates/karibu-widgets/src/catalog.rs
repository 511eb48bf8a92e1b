#![forbid(unsafe_code)]

//! Catalog model and filter state.
//!
//! The catalog is an immutable list of items probed from the markup once.
//! [`FilterState`] combines a free-text search with two categorical
//! selections; the visible set is a pure function of the state and the
//! catalog. Filtering toggles visibility only; display order is always
//! the original catalog order.
//!
//! # Invariants
//!
//! - **Purity**: the visible set never depends on previously rendered
//!   visibility, only on the current `FilterState`. Re-applying the same
//!   state is idempotent.
//! - **AND across dimensions, OR within search**: an item is visible iff
//!   `(search empty OR any text field matches) AND region matches AND
//!   kind matches`.
//! - **Order**: `apply` walks items in catalog order and never reorders.

use karibu_core::dom::{CardNode, ElementId};
use karibu_core::view::ViewUpdate;

/// A normalized categorical value (trimmed, lowercased).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Facet(String);

impl Facet {
    /// Normalize a raw attribute value.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// The normalized value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One dimension's filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// The dimension is unconstrained.
    #[default]
    All,
    /// Only items with this facet match.
    Facet(Facet),
}

impl Selection {
    /// Parse a `data-filter` attribute value; `"all"` disables the
    /// dimension.
    #[must_use]
    pub fn from_attr(raw: &str) -> Self {
        let facet = Facet::new(raw);
        if facet.as_str() == "all" {
            Self::All
        } else {
            Self::Facet(facet)
        }
    }

    /// Whether a facet satisfies this selection.
    #[must_use]
    pub fn matches(&self, facet: &Facet) -> bool {
        match self {
            Self::All => true,
            Self::Facet(wanted) => wanted == facet,
        }
    }
}

/// One static catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// The card's element id.
    pub id: ElementId,
    /// The `data-name` attribute.
    pub name: String,
    /// Heading text.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Normalized region facet.
    pub region: Facet,
    /// Normalized type facet.
    pub kind: Facet,
}

impl CatalogItem {
    /// Build from a markup node, normalizing the facets.
    #[must_use]
    pub fn from_node(node: &CardNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            title: node.title.clone(),
            description: node.description.clone(),
            region: Facet::new(&node.region),
            kind: Facet::new(&node.kind),
        }
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Active search text plus categorical selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    search: String,
    region: Selection,
    kind: Selection,
}

impl FilterState {
    /// Record the search text (trimmed, lowercased).
    pub fn set_search(&mut self, raw: &str) {
        self.search = raw.trim().to_lowercase();
    }

    /// The normalized search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Record the region selection.
    pub fn set_region(&mut self, selection: Selection) {
        self.region = selection;
    }

    /// Record the type selection.
    pub fn set_kind(&mut self, selection: Selection) {
        self.kind = selection;
    }

    /// Back to the unconstrained state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The combined visibility predicate.
    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        (self.search.is_empty() || item.matches_text(&self.search))
            && self.region.matches(&item.region)
            && self.kind.matches(&item.kind)
    }
}

/// The immutable item list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build from markup nodes, in document order.
    #[must_use]
    pub fn from_nodes(nodes: &[CardNode]) -> Self {
        Self {
            items: nodes.iter().map(CatalogItem::from_node).collect(),
        }
    }

    /// The items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of the items visible under `state`, in catalog order.
    #[must_use]
    pub fn visible_ids(&self, state: &FilterState) -> Vec<&ElementId> {
        self.items
            .iter()
            .filter(|item| state.matches(item))
            .map(|item| &item.id)
            .collect()
    }

    /// Number of items visible under `state`.
    #[must_use]
    pub fn visible_count(&self, state: &FilterState) -> usize {
        self.items.iter().filter(|item| state.matches(item)).count()
    }

    /// Write every item's visibility and toggle the no-results indicator.
    /// Always evaluates the full catalog against `state`; returns the
    /// visible count.
    pub fn apply(
        &self,
        state: &FilterState,
        no_results: Option<&ElementId>,
        view: &mut dyn ViewUpdate,
    ) -> usize {
        let mut visible = 0;
        for item in &self.items {
            let shown = state.matches(item);
            view.set_visible(&item.id, shown);
            if shown {
                visible += 1;
            }
        }
        if let Some(indicator) = no_results {
            view.set_visible(indicator, visible == 0);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(visible, total = self.items.len(), "catalog: applied filters");
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, name: &str, title: &str, desc: &str, region: &str, kind: &str) -> CardNode {
        CardNode {
            id: ElementId::new(id),
            name: name.to_string(),
            title: title.to_string(),
            description: desc.to_string(),
            region: region.to_string(),
            kind: kind.to_string(),
        }
    }

    fn sample() -> Catalog {
        Catalog::from_nodes(&[
            card(
                "card-nairobi",
                "nairobi",
                "Nairobi Safari",
                "City park wildlife a stone's throw from downtown.",
                "east",
                "wildlife",
            ),
            card(
                "card-mombasa",
                "mombasa",
                "Mombasa Beach",
                "White sand and old-town streets on the coast.",
                "coast",
                "beach",
            ),
        ])
    }

    fn ids<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a str> {
        catalog
            .visible_ids(state)
            .into_iter()
            .map(ElementId::as_str)
            .collect()
    }

    #[test]
    fn default_state_shows_everything_in_order() {
        let catalog = sample();
        let state = FilterState::default();
        assert_eq!(ids(&catalog, &state), ["card-nairobi", "card-mombasa"]);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let catalog = sample();
        let mut state = FilterState::default();
        state.set_search("NAIROBI");
        assert_eq!(ids(&catalog, &state), ["card-nairobi"]);
    }

    #[test]
    fn search_matches_title_and_description() {
        let catalog = sample();
        let mut state = FilterState::default();
        state.set_search("old-town");
        assert_eq!(ids(&catalog, &state), ["card-mombasa"]);

        state.set_search("Safari");
        assert_eq!(ids(&catalog, &state), ["card-nairobi"]);
    }

    #[test]
    fn region_filter_alone_selects_coast() {
        let catalog = sample();
        let mut state = FilterState::default();
        state.set_region(Selection::from_attr("coast"));
        assert_eq!(ids(&catalog, &state), ["card-mombasa"]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let catalog = sample();
        let mut state = FilterState::default();
        state.set_region(Selection::from_attr("coast"));
        state.set_kind(Selection::from_attr("wildlife"));
        assert!(ids(&catalog, &state).is_empty());
    }

    #[test]
    fn unmatched_search_with_any_filter_yields_nothing() {
        let catalog = sample();
        let mut state = FilterState::default();
        state.set_search("serengeti");
        state.set_region(Selection::from_attr("coast"));
        assert_eq!(catalog.visible_count(&state), 0);
    }

    #[test]
    fn reset_restores_full_catalog() {
        let catalog = sample();
        let mut state = FilterState::default();
        state.set_search("serengeti");
        state.set_region(Selection::from_attr("coast"));
        state.reset();
        assert_eq!(catalog.visible_count(&state), 2);
    }

    #[test]
    fn all_attr_is_unconstrained() {
        assert_eq!(Selection::from_attr("all"), Selection::All);
        assert_eq!(Selection::from_attr("  ALL "), Selection::All);
    }

    #[test]
    fn facets_normalize() {
        assert_eq!(Facet::new(" Coast "), Facet::new("coast"));
    }

    #[test]
    fn blank_search_is_no_constraint() {
        let catalog = sample();
        let mut state = FilterState::default();
        state.set_search("   ");
        assert_eq!(catalog.visible_count(&state), 2);
    }

    #[test]
    fn apply_reports_count_and_no_results() {
        struct Last {
            no_results_visible: Option<bool>,
        }
        impl ViewUpdate for Last {
            fn set_text(&mut self, _: &ElementId, _: &str) {}
            fn set_value(&mut self, _: &ElementId, _: &str) {}
            fn set_visible(&mut self, target: &ElementId, visible: bool) {
                if target.as_str() == "noResults" {
                    self.no_results_visible = Some(visible);
                }
            }
            fn set_error_signal(&mut self, _: &ElementId, _: karibu_core::view::ErrorSignal) {}
            fn set_enabled(&mut self, _: &ElementId, _: bool) {}
            fn set_active(&mut self, _: &ElementId, _: bool) {}
            fn focus(&mut self, _: &ElementId) {}
        }

        let catalog = sample();
        let no_results = ElementId::new("noResults");
        let mut view = Last {
            no_results_visible: None,
        };

        let mut state = FilterState::default();
        assert_eq!(catalog.apply(&state, Some(&no_results), &mut view), 2);
        assert_eq!(view.no_results_visible, Some(false));

        state.set_search("serengeti");
        assert_eq!(catalog.apply(&state, Some(&no_results), &mut view), 0);
        assert_eq!(view.no_results_visible, Some(true));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_state() -> impl Strategy<Value = FilterState> {
            (
                "[a-z ]{0,8}",
                prop_oneof![
                    Just(Selection::All),
                    Just(Selection::from_attr("coast")),
                    Just(Selection::from_attr("east")),
                ],
                prop_oneof![
                    Just(Selection::All),
                    Just(Selection::from_attr("beach")),
                    Just(Selection::from_attr("wildlife")),
                ],
            )
                .prop_map(|(search, region, kind)| {
                    let mut state = FilterState::default();
                    state.set_search(&search);
                    state.set_region(region);
                    state.set_kind(kind);
                    state
                })
        }

        /// Records only visibility writes, keyed by element.
        #[derive(Default, PartialEq, Debug)]
        struct VisMap(std::collections::BTreeMap<ElementId, bool>);

        impl ViewUpdate for VisMap {
            fn set_text(&mut self, _: &ElementId, _: &str) {}
            fn set_value(&mut self, _: &ElementId, _: &str) {}
            fn set_visible(&mut self, target: &ElementId, visible: bool) {
                self.0.insert(target.clone(), visible);
            }
            fn set_error_signal(&mut self, _: &ElementId, _: karibu_core::view::ErrorSignal) {}
            fn set_enabled(&mut self, _: &ElementId, _: bool) {}
            fn set_active(&mut self, _: &ElementId, _: bool) {}
            fn focus(&mut self, _: &ElementId) {}
        }

        proptest! {
            // History independence: applying any sequence of states and
            // then the final one leaves the view exactly as applying the
            // final state alone would. An implementation that read
            // rendered visibility back as an input would fail this.
            #[test]
            fn apply_is_history_independent(
                history in proptest::collection::vec(arbitrary_state(), 0..6),
                last in arbitrary_state(),
            ) {
                let catalog = sample();

                let mut walked = VisMap::default();
                for state in &history {
                    catalog.apply(state, None, &mut walked);
                }
                catalog.apply(&last, None, &mut walked);

                let mut fresh = VisMap::default();
                catalog.apply(&last, None, &mut fresh);

                prop_assert_eq!(walked, fresh);
            }

            #[test]
            fn visible_never_exceeds_catalog(state in arbitrary_state()) {
                let catalog = sample();
                prop_assert!(catalog.visible_count(&state) <= catalog.len());
            }

            #[test]
            fn visible_ids_preserve_order(state in arbitrary_state()) {
                let catalog = sample();
                let all: Vec<&ElementId> = catalog.items().iter().map(|i| &i.id).collect();
                let visible = catalog.visible_ids(&state);
                let mut cursor = 0;
                for id in visible {
                    let pos = all[cursor..].iter().position(|x| *x == id);
                    prop_assert!(pos.is_some(), "visible id out of catalog order");
                    cursor += pos.unwrap() + 1;
                }
            }
        }
    }
}

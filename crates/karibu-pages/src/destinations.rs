#![forbid(unsafe_code)]

//! Destinations page controller.
//!
//! Maintains a live view over the static catalog: debounced free-text
//! search combined with two single-choice filter groups. Every change
//! recomputes visibility from the full catalog (never from the currently
//! filtered subset), so filtering cannot depend on the order search and
//! filter events arrived in. An explicit search (Enter or the search
//! button) applies immediately and cancels any pending debounce window.

use std::time::Duration;

use tracing::{debug, info};

use karibu_core::dom::{Document, ElementId};
use karibu_core::event::{Event, KeyCode};
use karibu_core::view::ViewUpdate;
use karibu_runtime::{Cmd, Component};
use karibu_widgets::catalog::{Catalog, FilterState, Selection};
use karibu_widgets::filter_group::FilterGroup;

const SEARCH_TASK: &str = "destinations.search";

/// Debounce window for search input.
#[derive(Debug, Clone)]
pub struct DebounceConfig {
    /// Quiet period after the last keystroke before the search runs.
    pub quiet: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            quiet: Duration::from_millis(300),
        }
    }
}

/// Messages driving the destinations page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationsMsg {
    /// A raw interaction event.
    Dom(Event),
    /// The debounce window elapsed (or an explicit search fired).
    ApplySearch,
}

impl From<Event> for DestinationsMsg {
    fn from(event: Event) -> Self {
        Self::Dom(event)
    }
}

/// The destinations page controller.
#[derive(Debug)]
pub struct DestinationsPage {
    search_input: Option<ElementId>,
    search_button: Option<ElementId>,
    region: Option<FilterGroup>,
    kind: Option<FilterGroup>,
    catalog: Catalog,
    no_results: Option<ElementId>,
    state: FilterState,
    last_visible: usize,
    config: DebounceConfig,
}

impl DestinationsPage {
    /// Bind against a document. Returns `None` when none of the page's
    /// hooks exist; each feature (search, either filter group, the
    /// no-results indicator) degrades individually.
    #[must_use]
    pub fn bind(doc: &Document, config: DebounceConfig) -> Option<Self> {
        let search_input = doc.element("searchInput");
        let search_button = doc.element("searchBtn");
        let region = doc
            .element("regionFilters")
            .and_then(|id| doc.filter_group(&id))
            .and_then(FilterGroup::from_nodes);
        let kind = doc
            .element("typeFilters")
            .and_then(|id| doc.filter_group(&id))
            .and_then(FilterGroup::from_nodes);
        let no_results = doc.element("noResults");
        let catalog = Catalog::from_nodes(doc.cards());

        if search_input.is_none() && region.is_none() && kind.is_none() && catalog.is_empty() {
            debug!("destinations: no hooks present, page not bound");
            return None;
        }
        if search_input.is_none() {
            debug!("destinations: search input missing, search disabled");
        }
        info!(
            cards = catalog.len(),
            search = search_input.is_some(),
            "destinations: bound"
        );

        let last_visible = catalog.len();
        Some(Self {
            search_input,
            search_button,
            region,
            kind,
            catalog,
            no_results,
            state: FilterState::default(),
            last_visible,
            config,
        })
    }

    /// The current filter state.
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Visible count after the most recent application.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.last_visible
    }

    /// Apply a search term immediately, without a debounce window.
    /// Returns the visible count.
    pub fn search(&mut self, term: &str, view: &mut dyn ViewUpdate) -> usize {
        self.state.set_search(term);
        self.apply(view)
    }

    /// Apply categorical selections directly, leaving the search text as
    /// is. Button groups are not moved; the next button click overrides
    /// these selections. Returns the visible count.
    pub fn apply_filters(
        &mut self,
        region: Selection,
        kind: Selection,
        view: &mut dyn ViewUpdate,
    ) -> usize {
        self.state.set_region(region);
        self.state.set_kind(kind);
        self.apply(view)
    }

    /// Clear search and both groups, show the full catalog.
    pub fn reset(&mut self, view: &mut dyn ViewUpdate) {
        self.state.reset();
        if let Some(group) = &mut self.region {
            group.reset();
            group.render(view);
        }
        if let Some(group) = &mut self.kind {
            group.reset();
            group.render(view);
        }
        if let Some(input) = &self.search_input {
            view.set_value(input, "");
        }
        self.apply(view);
    }

    fn apply(&mut self, view: &mut dyn ViewUpdate) -> usize {
        self.last_visible = self
            .catalog
            .apply(&self.state, self.no_results.as_ref(), view);
        self.last_visible
    }

    fn sync_selections(&mut self) {
        if let Some(group) = &self.region {
            self.state.set_region(group.selection().clone());
        }
        if let Some(group) = &self.kind {
            self.state.set_kind(group.selection().clone());
        }
    }

    fn on_filter_click(&mut self, target: &ElementId, view: &mut dyn ViewUpdate) -> bool {
        let mut changed = false;
        if let Some(group) = &mut self.region
            && group.contains(target)
        {
            changed = group.select(target);
            if changed {
                group.render(view);
            }
        }
        if let Some(group) = &mut self.kind
            && group.contains(target)
        {
            changed = group.select(target);
            if changed {
                group.render(view);
            }
        }
        if changed {
            self.sync_selections();
            self.apply(view);
        }
        changed
    }
}

impl Component for DestinationsPage {
    type Message = DestinationsMsg;

    fn update(&mut self, msg: DestinationsMsg, view: &mut dyn ViewUpdate) -> Cmd<DestinationsMsg> {
        match msg {
            DestinationsMsg::Dom(Event::Input { target, value })
                if Some(&target) == self.search_input.as_ref() =>
            {
                self.state.set_search(&value);
                Cmd::schedule(SEARCH_TASK, self.config.quiet, DestinationsMsg::ApplySearch)
            }
            DestinationsMsg::Dom(Event::Key(key))
                if key.code == KeyCode::Enter
                    && self.search_input.is_some()
                    && key.target == self.search_input =>
            {
                Cmd::batch(vec![
                    Cmd::cancel(SEARCH_TASK),
                    Cmd::msg(DestinationsMsg::ApplySearch),
                ])
            }
            DestinationsMsg::Dom(Event::Click { target })
                if Some(&target) == self.search_button.as_ref() =>
            {
                Cmd::batch(vec![
                    Cmd::cancel(SEARCH_TASK),
                    Cmd::msg(DestinationsMsg::ApplySearch),
                ])
            }
            DestinationsMsg::Dom(Event::Click { target }) => {
                self.on_filter_click(&target, view);
                Cmd::none()
            }
            DestinationsMsg::ApplySearch => {
                self.apply(view);
                Cmd::none()
            }
            DestinationsMsg::Dom(_) => Cmd::none(),
        }
    }
}

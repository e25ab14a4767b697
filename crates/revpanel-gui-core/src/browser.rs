//! Preset browser state machine.
//!
//! The browser is a popover with three columns: categories, the presets of
//! the hovered category (or the search results), and a detail panel for the
//! hovered preset. All of its state lives in a [`BrowserSession`]; every
//! transition is a [`BrowserMessage`] applied through
//! [`PresetBrowser::update`], and everything the view shows is derived from
//! the session on demand.
//!
//! ```text
//!            SearchChanged("") / hover / leave
//!                 ┌───────────┐
//!                 ▼           │
//!  closed ──ToggleOpen──► open ──SelectPreset(id)──► closed, selected = id
//!    ▲                      │
//!    └──SetOpen(false)──────┴──ResetInstance──► closed, selected = None
//! ```
//!
//! A non-empty search always takes precedence over category hover: the
//! category column hides and the preset column shows the matches.

use std::collections::BTreeSet;
use std::sync::Arc;

use revpanel_config::{Catalog, FAVORITES_CATEGORY_ID, FAVORITES_CATEGORY_NAME, Preset};

/// Mutable browser state. All fields are read-only outside this module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserSession {
    /// Selected preset id. Survives closing the browser.
    pub selected: Option<String>,
    /// Hovered category id (may be the favorites pseudo-category).
    pub hovered_category: Option<String>,
    /// Hovered preset id.
    pub hovered_preset: Option<String>,
    /// Search text.
    pub search: String,
    /// Favorited preset ids, for this session only.
    pub favorites: BTreeSet<String>,
    /// Whether the popover is open.
    pub open: bool,
    /// Whether the pointer is over the reset row.
    pub reset_row_hovered: bool,
}

/// Input to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserMessage {
    /// Search field text changed.
    SearchChanged(String),
    /// Pointer entered a category row.
    CategoryHovered(String),
    /// Pointer entered a preset row.
    PresetHovered(String),
    /// Pointer entered the reset row.
    ResetHovered,
    /// Pointer left the column area.
    ColumnsLeft,
    /// Pointer left the preset list.
    PresetZoneLeft,
    /// A preset row was clicked.
    SelectPreset(String),
    /// The reset row was clicked.
    ResetInstance,
    /// A preset's star was clicked.
    ToggleFavorite(String),
    /// Open or close the popover.
    SetOpen(bool),
    /// Flip the popover (trigger click).
    ToggleOpen,
}

/// Output of a browser transition, for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// A preset was chosen.
    PresetSelected(String),
    /// The selection was reset.
    SelectionCleared,
    /// The popover opened or closed.
    OpenChanged(bool),
}

/// Message shown when the preset column is visible but empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Search matched nothing.
    NoResults,
    /// Favorites hovered with no favorites.
    NoFavorites,
    /// A category with no presets.
    NoPresets,
}

impl EmptyState {
    /// Text shown in place of the list.
    pub const fn message(self) -> &'static str {
        match self {
            EmptyState::NoResults => "No presets found",
            EmptyState::NoFavorites => "No current favorites",
            EmptyState::NoPresets => "No presets",
        }
    }
}

/// One row of the category column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRow<'a> {
    /// Category id.
    pub id: &'a str,
    /// Display name.
    pub name: &'a str,
    /// Row is hovered.
    pub hovered: bool,
    /// Row is the favorites pseudo-category.
    pub favorites: bool,
}

/// Label of the trigger when nothing is selected.
pub const NO_SELECTION_LABEL: &str = "Select preset";

/// Preset browser over an immutable catalog.
#[derive(Debug, Clone)]
pub struct PresetBrowser {
    catalog: Arc<Catalog>,
    session: BrowserSession,
}

impl PresetBrowser {
    /// Closed browser with nothing selected.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            session: BrowserSession::default(),
        }
    }

    /// Start with `id` selected. Unknown ids leave the selection empty.
    #[must_use]
    pub fn with_default_preset(mut self, id: &str) -> Self {
        if self.catalog.contains_preset(id) {
            self.session.selected = Some(id.to_string());
        } else {
            tracing::warn!(preset = id, "default preset not in catalog");
        }
        self
    }

    /// The catalog being browsed.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current session state.
    pub fn session(&self) -> &BrowserSession {
        &self.session
    }

    /// Whether the popover is open.
    pub fn is_open(&self) -> bool {
        self.session.open
    }

    /// Whether a preset is favorited.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.session.favorites.contains(id)
    }

    /// Apply one message and return what the host should hear about.
    pub fn update(&mut self, message: BrowserMessage) -> Vec<BrowserEvent> {
        let mut events = Vec::new();
        let s = &mut self.session;

        match message {
            BrowserMessage::SearchChanged(text) => {
                if !text.is_empty() {
                    s.hovered_category = None;
                    s.hovered_preset = None;
                }
                s.search = text;
            }
            BrowserMessage::CategoryHovered(id) => {
                if id != FAVORITES_CATEGORY_ID && self.catalog.category(&id).is_none() {
                    tracing::warn!(category = %id, "ignoring hover on unknown category");
                    return events;
                }
                s.hovered_category = Some(id);
                s.hovered_preset = None;
                s.reset_row_hovered = false;
            }
            BrowserMessage::PresetHovered(id) => {
                if !self.catalog.contains_preset(&id) {
                    tracing::warn!(preset = %id, "ignoring hover on unknown preset");
                    return events;
                }
                s.hovered_preset = Some(id);
            }
            BrowserMessage::ResetHovered => {
                s.reset_row_hovered = true;
                s.hovered_category = None;
                s.hovered_preset = None;
            }
            BrowserMessage::ColumnsLeft => {
                s.hovered_category = None;
                s.hovered_preset = None;
                s.reset_row_hovered = false;
            }
            BrowserMessage::PresetZoneLeft => {
                s.hovered_preset = None;
            }
            BrowserMessage::SelectPreset(id) => {
                if !self.catalog.contains_preset(&id) {
                    tracing::warn!(preset = %id, "ignoring selection of unknown preset");
                    return events;
                }
                tracing::debug!(preset = %id, "preset selected");
                s.selected = Some(id.clone());
                events.push(BrowserEvent::PresetSelected(id));
                Self::set_open(s, false, &mut events);
            }
            BrowserMessage::ResetInstance => {
                tracing::debug!("preset selection cleared");
                s.selected = None;
                events.push(BrowserEvent::SelectionCleared);
                Self::set_open(s, false, &mut events);
            }
            BrowserMessage::ToggleFavorite(id) => {
                if !self.catalog.contains_preset(&id) {
                    tracing::warn!(preset = %id, "ignoring favorite toggle on unknown preset");
                    return events;
                }
                if !s.favorites.remove(&id) {
                    s.favorites.insert(id);
                }
            }
            BrowserMessage::SetOpen(open) => Self::set_open(s, open, &mut events),
            BrowserMessage::ToggleOpen => {
                let open = !s.open;
                Self::set_open(s, open, &mut events);
            }
        }

        events
    }

    fn set_open(session: &mut BrowserSession, open: bool, events: &mut Vec<BrowserEvent>) {
        if session.open != open {
            session.open = open;
            events.push(BrowserEvent::OpenChanged(open));
        }
    }

    /// True while the search text is non-empty.
    pub fn is_searching(&self) -> bool {
        !self.session.search.is_empty()
    }

    /// True while the favorites pseudo-category is hovered.
    pub fn favorites_hovered(&self) -> bool {
        self.session.hovered_category.as_deref() == Some(FAVORITES_CATEGORY_ID)
    }

    /// Presets for the preset column, in catalog order.
    pub fn visible_presets(&self) -> Vec<&Preset> {
        let catalog = &self.catalog;
        if self.is_searching() {
            return catalog.search(&self.session.search).collect();
        }
        match self.session.hovered_category.as_deref() {
            Some(FAVORITES_CATEGORY_ID) => catalog
                .presets
                .iter()
                .filter(|p| self.session.favorites.contains(&p.id))
                .collect(),
            Some(category) => catalog.presets_in(category).collect(),
            None => Vec::new(),
        }
    }

    /// Whether the category column is shown.
    pub fn show_categories(&self) -> bool {
        !self.is_searching()
    }

    /// Whether the preset column is shown.
    pub fn show_presets(&self) -> bool {
        self.session.hovered_category.is_some() || self.is_searching()
    }

    /// Preset shown in the detail panel.
    ///
    /// The hovered preset, or with nothing hovered, the only search match.
    pub fn detail_preset(&self) -> Option<&Preset> {
        if let Some(id) = &self.session.hovered_preset {
            return self.catalog.preset(id);
        }
        if self.is_searching() {
            let mut matches = self.catalog.search(&self.session.search);
            if let (Some(only), None) = (matches.next(), matches.next()) {
                return Some(only);
            }
        }
        None
    }

    /// Whether the detail panel is shown.
    pub fn show_detail(&self) -> bool {
        self.detail_preset().is_some()
    }

    /// Empty-list message, when the preset column is shown with no rows.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.show_presets() || !self.visible_presets().is_empty() {
            return None;
        }
        Some(if self.is_searching() {
            EmptyState::NoResults
        } else if self.favorites_hovered() {
            EmptyState::NoFavorites
        } else {
            EmptyState::NoPresets
        })
    }

    /// Category column rows: favorites first, then the catalog categories.
    pub fn category_rows(&self) -> Vec<CategoryRow<'_>> {
        let hovered = self.session.hovered_category.as_deref();
        std::iter::once(CategoryRow {
            id: FAVORITES_CATEGORY_ID,
            name: FAVORITES_CATEGORY_NAME,
            hovered: hovered == Some(FAVORITES_CATEGORY_ID),
            favorites: true,
        })
        .chain(self.catalog.categories.iter().map(|c| CategoryRow {
            id: &c.id,
            name: &c.name,
            hovered: hovered == Some(c.id.as_str()),
            favorites: false,
        }))
        .collect()
    }

    /// The selected preset, if any.
    pub fn selected_preset(&self) -> Option<&Preset> {
        self.session
            .selected
            .as_deref()
            .and_then(|id| self.catalog.preset(id))
    }

    /// Text on the trigger button.
    pub fn trigger_label(&self) -> &str {
        self.selected_preset()
            .map_or(NO_SELECTION_LABEL, |p| p.name.as_str())
    }
}

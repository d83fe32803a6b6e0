//! The keyboard-driven state machine behind the picker.
//!
//! Raw input arrives as [`PickerEvent`]s. The controller interprets each one
//! against the current state into an [`Action`] and applies it. Anything the
//! current state has no use for comes back as [`EventResult::Unhandled`] so
//! the presentation layer can decide what to do with it.

use crate::filter::filter_positions;
use crate::index::{char_for, position_for};
use crate::models::{Catalog, CatalogItem, Snippet};
use tracing::trace;

/// Character that switches from browsing to filtering.
pub const FILTER_KEY: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Backspace,
    Char(char),
    /// A pointer activation on the row at this flat position.
    Activate(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    EnterFilterMode,
    ExitFilterMode,
    AppendFilterChar(char),
    Backspace,
    QuickSelect(usize),
    Confirm,
    ConfirmAt(usize),
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Browsing { selected: usize },
    Filtering { selected: usize, query: String },
    /// The session is over, with the chosen snippet if there was one.
    Finished(Option<Snippet>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Unhandled,
    Handled,
    Selected(Snippet),
    Cancelled,
}

/// One line of the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRow<'a> {
    Separator(&'a str),
    Snippet {
        /// Position in the flat view.
        position: usize,
        key: char,
        snippet: &'a Snippet,
        selected: bool,
    },
}

/// Whether `c` may be typed into the filter query.
pub fn is_filter_char(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric() || matches!(c, ' ' | '-' | '_' | '.')
}

#[derive(Debug)]
pub struct SelectionController {
    catalog: Catalog,
    state: SelectionState,
    /// Catalog positions visible under the current query.
    view: Vec<usize>,
}

impl SelectionController {
    pub fn new(catalog: Catalog) -> Self {
        let view = (0..catalog.len()).collect();
        Self {
            catalog,
            state: SelectionState::Browsing { selected: 0 },
            view,
        }
    }

    /// Replace the catalog after a reload. Selection and query are not kept.
    pub fn reload(&mut self, catalog: Catalog) {
        *self = Self::new(catalog);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_filtering(&self) -> bool {
        matches!(self.state, SelectionState::Filtering { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SelectionState::Finished(_))
    }

    pub fn query(&self) -> &str {
        match &self.state {
            SelectionState::Filtering { query, .. } => query,
            _ => "",
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            SelectionState::Browsing { selected } | SelectionState::Filtering { selected, .. } => {
                Some(selected)
            }
            SelectionState::Finished(_) => None,
        }
    }

    pub fn selected_snippet(&self) -> Option<&Snippet> {
        self.selected().and_then(|position| self.snippet_at(position))
    }

    /// Number of snippets in the flat view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn snippet_at(&self, position: usize) -> Option<&Snippet> {
        self.view
            .get(position)
            .and_then(|&index| self.catalog.get(index))
    }

    /// The separator-free, filtered sequence used for navigation.
    pub fn flat_view(&self) -> impl Iterator<Item = &Snippet> + '_ {
        self.view.iter().filter_map(|&index| self.catalog.get(index))
    }

    /// The rows to display. Group separators only appear while the query is
    /// empty; a non-empty query shows a flat list.
    pub fn rows(&self) -> Vec<ViewRow<'_>> {
        let selected = self.selected();
        let row = |position: usize, snippet| ViewRow::Snippet {
            position,
            key: char_for(position),
            snippet,
            selected: selected == Some(position),
        };

        if !self.query().is_empty() {
            return self
                .flat_view()
                .enumerate()
                .map(|(position, snippet)| row(position, snippet))
                .collect();
        }

        self.catalog
            .items()
            .iter()
            .filter_map(|item| match item {
                CatalogItem::Separator(name) => Some(ViewRow::Separator(name.as_str())),
                CatalogItem::Snippet(index) => self.catalog.get(*index).map(|s| row(*index, s)),
            })
            .collect()
    }

    /// Interpret and apply one input event.
    pub fn handle(&mut self, event: PickerEvent) -> EventResult {
        match self.action_for(event) {
            Some(action) => self.apply(action),
            None => EventResult::Unhandled,
        }
    }

    /// What `event` means in the current state, if anything.
    pub fn action_for(&self, event: PickerEvent) -> Option<Action> {
        let filtering = match self.state {
            SelectionState::Browsing { .. } => false,
            SelectionState::Filtering { .. } => true,
            SelectionState::Finished(_) => return None,
        };

        let action = match event {
            PickerEvent::ArrowUp => Action::MoveUp,
            PickerEvent::ArrowDown => Action::MoveDown,
            PickerEvent::Enter => Action::Confirm,
            PickerEvent::Escape if filtering => Action::ExitFilterMode,
            PickerEvent::Escape => Action::Cancel,
            PickerEvent::Backspace => Action::Backspace,
            PickerEvent::Activate(position) => Action::ConfirmAt(position),
            PickerEvent::Char(c) if filtering => Action::AppendFilterChar(c),
            PickerEvent::Char(FILTER_KEY) => Action::EnterFilterMode,
            PickerEvent::Char(c) => Action::QuickSelect(position_for(c)?),
        };
        Some(action)
    }

    pub fn apply(&mut self, action: Action) -> EventResult {
        trace!(?action, state = ?self.state, "applying picker action");

        let (selected, filtering) = match &self.state {
            SelectionState::Browsing { selected } => (*selected, false),
            SelectionState::Filtering { selected, .. } => (*selected, true),
            SelectionState::Finished(_) => return EventResult::Unhandled,
        };
        let last = self.view.len().saturating_sub(1);

        match action {
            Action::MoveUp => self.set_selected(selected.min(last).saturating_sub(1)),
            Action::MoveDown => self.set_selected((selected.min(last) + 1).min(last)),
            Action::EnterFilterMode if !filtering => self.set_query(Some(String::new())),
            Action::ExitFilterMode if filtering => self.set_query(None),
            Action::AppendFilterChar(c) if filtering && is_filter_char(c) => {
                let mut query = self.query().to_owned();
                query.push(c);
                self.set_query(Some(query));
            }
            Action::Backspace if filtering && !self.query().is_empty() => {
                let mut query = self.query().to_owned();
                query.pop();
                self.set_query(Some(query));
            }
            Action::QuickSelect(position) if !filtering => return self.confirm(position),
            Action::Confirm => return self.confirm(selected),
            Action::ConfirmAt(position) => return self.confirm(position),
            Action::Cancel if !filtering => {
                self.state = SelectionState::Finished(None);
                return EventResult::Cancelled;
            }
            _ => return EventResult::Unhandled,
        }

        EventResult::Handled
    }

    fn set_selected(&mut self, position: usize) {
        if let SelectionState::Browsing { selected } | SelectionState::Filtering { selected, .. } =
            &mut self.state
        {
            *selected = position;
        }
    }

    /// Switch to filtering with `query`, or back to browsing with `None`,
    /// resetting the selection to the top.
    fn set_query(&mut self, query: Option<String>) {
        self.view = filter_positions(self.catalog.snippets(), query.as_deref().unwrap_or(""));
        self.state = match query {
            Some(query) => SelectionState::Filtering { selected: 0, query },
            None => SelectionState::Browsing { selected: 0 },
        };
    }

    fn confirm(&mut self, position: usize) -> EventResult {
        let Some(snippet) = self.snippet_at(position).cloned() else {
            return EventResult::Unhandled;
        };
        trace!(id = %snippet.id, name = %snippet.display_name, position, "snippet confirmed");
        self.state = SelectionState::Finished(Some(snippet.clone()));
        EventResult::Selected(snippet)
    }
}

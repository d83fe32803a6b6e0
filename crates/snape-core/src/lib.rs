//! Snape core: loads a directory of snippet files into an ordered catalog
//! and drives the keyboard state machine that picks one of them.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod models;
pub mod selection;
pub mod settings;
pub mod source;

// Re-export common items for convenience
pub use catalog::{strip_numeric_prefix, CatalogBuilder};
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use config::{get_config_dir, resolve_snippets_dir, SELECTION_DELAY, SIZE_RANGE};
pub use error::{Result, SnapeError};
pub use models::{Candidate, Catalog, CatalogItem, Group, Snippet, SnippetId};
pub use selection::{EventResult, PickerEvent, SelectionController, SelectionState, ViewRow};
pub use settings::{Settings, SettingsStore, Theme};
pub use source::SnippetSource;

/// Scan `source` and build a fresh catalog from what it finds.
pub fn load_catalog(source: &SnippetSource) -> Catalog {
    let catalog: Catalog = source.load().into_iter().collect();
    tracing::debug!(
        "Loaded {} snippets from {}",
        catalog.len(),
        source.root().display()
    );
    catalog
}

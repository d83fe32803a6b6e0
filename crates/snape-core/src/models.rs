use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

/// Identity of a loaded snippet, unique across loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnippetId(Uuid);

impl SnippetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SnippetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A raw file read from the snippets directory, before cataloguing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub content: String,
    pub path: PathBuf,
    /// Folder name for grouped files, `None` for files at the root.
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: SnippetId,
    /// Filename without extension. Used for sorting and duplicate detection.
    pub name: String,
    /// What the picker shows; differs from `name` only when names collide.
    pub display_name: String,
    pub content: String,
    pub source_path: PathBuf,
    pub group: Option<String>,
}

impl Snippet {
    pub fn new(name: String, content: String, source_path: PathBuf, group: Option<String>) -> Self {
        Self {
            id: SnippetId::new(),
            display_name: name.clone(),
            name,
            content,
            source_path,
            group,
        }
    }

    /// Extension of the source file, empty when there is none.
    pub fn extension(&self) -> &str {
        self.source_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
    }
}

impl From<Candidate> for Snippet {
    fn from(candidate: Candidate) -> Self {
        Snippet::new(
            candidate.name,
            candidate.content,
            candidate.path,
            candidate.group,
        )
    }
}

/// Snippets loaded from one subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Raw directory name, e.g. `01-work`. Determines group order.
    pub folder_name: String,
    /// Directory name without its numeric prefix, e.g. `work`.
    pub display_name: String,
    pub snippets: Vec<Snippet>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogItem {
    /// Position of the snippet in [`Catalog::snippets`].
    Snippet(usize),
    /// Group heading, carrying the group's display name.
    Separator(String),
}

/// The ordered result of one load.
///
/// `items` is the browse view: ungrouped snippets first, then each group as a
/// separator followed by its members. `snippets` is the same order with the
/// separators removed, which is what navigation and quick-select address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    snippets: Vec<Snippet>,
}

impl Catalog {
    pub(crate) fn from_parts(ungrouped: Vec<Snippet>, groups: Vec<Group>) -> Self {
        let mut items = Vec::with_capacity(ungrouped.len() + groups.len() * 2);
        let mut snippets = Vec::with_capacity(ungrouped.len());

        for snippet in ungrouped {
            items.push(CatalogItem::Snippet(snippets.len()));
            snippets.push(snippet);
        }

        for group in groups {
            if group.snippets.is_empty() {
                continue;
            }
            items.push(CatalogItem::Separator(group.display_name));
            for snippet in group.snippets {
                items.push(CatalogItem::Snippet(snippets.len()));
                snippets.push(snippet);
            }
        }

        Self { items, snippets }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get(&self, position: usize) -> Option<&Snippet> {
        self.snippets.get(position)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

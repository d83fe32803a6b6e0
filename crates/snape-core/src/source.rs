use crate::config::ensure_dir;
use crate::error::Result;
use crate::models::Candidate;
use std::cell::Cell;
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files written into an empty snippets directory so the picker has
/// something to show on first run.
pub const SAMPLE_SNIPPETS: [(&str, &str); 3] = [
    ("hello.txt", "Hello, World!"),
    ("greeting.txt", "Hi there!\n\nHope you're having a great day!"),
    (
        "hello-world.go",
        "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"Hello, World!\")\n}",
    ),
];

/// Reads snippet files from a directory and at most one level of
/// subdirectories.
#[derive(Debug)]
pub struct SnippetSource {
    root: PathBuf,
    seeded: Cell<bool>,
}

impl SnippetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            seeded: Cell::new(false),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Produce the candidate set for a fresh load.
    ///
    /// The root is created if missing. An empty result triggers a one-time
    /// seeding with [`SAMPLE_SNIPPETS`] followed by a second listing. A root
    /// that cannot be listed yields an empty set without seeding.
    pub fn load(&self) -> Vec<Candidate> {
        if let Err(e) = ensure_dir(&self.root) {
            debug!("Failed to create {}: {}", self.root.display(), e);
        }

        let candidates = match self.list() {
            Ok(candidates) => candidates,
            Err(e) => {
                debug!("Failed to read snippets directory {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        if !candidates.is_empty() || self.seeded.replace(true) {
            return candidates;
        }

        if let Err(e) = self.seed() {
            debug!("Failed to create sample snippets: {}", e);
        }
        self.list().unwrap_or_default()
    }

    /// List the candidates currently on disk.
    pub fn list(&self) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();

        for entry in sorted_entries(&self.root)? {
            let path = entry.path();
            let Ok(metadata) = fs::metadata(&path) else {
                continue;
            };

            if metadata.is_dir() {
                let folder_name = entry.file_name().to_string_lossy().into_owned();
                let members = match sorted_entries(&path) {
                    Ok(members) => members,
                    Err(e) => {
                        debug!("Failed to read group {}: {}", path.display(), e);
                        continue;
                    }
                };
                for member in members {
                    if let Some(candidate) = read_candidate(&member.path(), Some(&folder_name)) {
                        candidates.push(candidate);
                    }
                }
            } else if let Some(candidate) = read_candidate(&path, None) {
                candidates.push(candidate);
            }
        }

        Ok(candidates)
    }

    /// Write any missing sample files. Returns how many were created.
    pub fn seed(&self) -> Result<usize> {
        ensure_dir(&self.root)?;
        let mut created = 0;
        for (filename, content) in SAMPLE_SNIPPETS {
            let path = self.root.join(filename);
            if path.exists() {
                continue;
            }
            fs::write(&path, content)?;
            debug!("Created sample snippet: {}", filename);
            created += 1;
        }
        Ok(created)
    }
}

/// Visible directory entries, ordered by file name.
fn sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !is_hidden(&entry) {
            entries.push(entry);
        }
    }
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn read_candidate(path: &Path, group: Option<&str>) -> Option<Candidate> {
    if !fs::metadata(path).map(|m| m.is_file()).unwrap_or(false) {
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Failed to load {}: {}", path.display(), e);
            return None;
        }
    };

    let name = path.file_stem()?.to_string_lossy().into_owned();
    match group {
        Some(group) => debug!("Loaded snippet: {} (group: {})", name, group),
        None => debug!("Loaded snippet: {}", name),
    }

    Some(Candidate {
        name,
        content,
        path: path.to_path_buf(),
        group: group.map(str::to_owned),
    })
}

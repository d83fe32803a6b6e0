use crate::models::{Candidate, Catalog, Group, Snippet};
use std::collections::HashMap;

/// Strip a leading `digits-` prefix from a folder name, so `01-work` is
/// shown as `work`. Names without such a prefix are returned unchanged.
pub fn strip_numeric_prefix(folder_name: &str) -> &str {
    let digits = folder_name
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits > 0 && folder_name[digits..].starts_with('-') {
        &folder_name[digits + 1..]
    } else {
        folder_name
    }
}

/// Collects candidates and turns them into an ordered [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    ungrouped: Vec<Snippet>,
    groups: Vec<Group>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: Candidate) {
        let snippet = Snippet::from(candidate);
        let Some(folder_name) = snippet.group.as_deref() else {
            self.ungrouped.push(snippet);
            return;
        };

        match self.groups.iter_mut().find(|g| g.folder_name == folder_name) {
            Some(group) => group.snippets.push(snippet),
            None => {
                let folder_name = folder_name.to_owned();
                self.groups.push(Group {
                    display_name: strip_numeric_prefix(&folder_name).to_owned(),
                    folder_name,
                    snippets: vec![snippet],
                });
            }
        }
    }

    pub fn build(mut self) -> Catalog {
        // Sorts are stable, so equal keys keep their enumeration order.
        self.ungrouped.sort_by_cached_key(|s| s.name.to_lowercase());
        for group in &mut self.groups {
            group.snippets.sort_by_cached_key(|s| s.name.to_lowercase());
        }
        self.groups.retain(|g| !g.snippets.is_empty());
        self.groups
            .sort_by_cached_key(|g| g.folder_name.to_lowercase());

        self.resolve_duplicate_names();

        Catalog::from_parts(self.ungrouped, self.groups)
    }

    /// Give every snippet whose name occurs more than once in the whole
    /// catalog a display name with its extension appended.
    fn resolve_duplicate_names(&mut self) {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for snippet in self.all_snippets() {
            *counts.entry(snippet.name.clone()).or_default() += 1;
        }

        let ungrouped = self.ungrouped.iter_mut();
        let grouped = self.groups.iter_mut().flat_map(|g| g.snippets.iter_mut());
        for snippet in ungrouped.chain(grouped) {
            if counts.get(&snippet.name).copied().unwrap_or(0) < 2 {
                continue;
            }
            snippet.display_name = format!("{}.{}", snippet.name, snippet.extension());
        }
    }

    fn all_snippets(&self) -> impl Iterator<Item = &Snippet> {
        self.ungrouped
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.snippets.iter()))
    }
}

impl FromIterator<Candidate> for Catalog {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut builder = CatalogBuilder::new();
        for candidate in iter {
            builder.push(candidate);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogItem;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn candidate(file: &str, group: Option<&str>) -> Candidate {
        let path = match group {
            Some(g) => PathBuf::from("/snippets").join(g).join(file),
            None => PathBuf::from("/snippets").join(file),
        };
        Candidate {
            name: path.file_stem().unwrap().to_string_lossy().into_owned(),
            content: format!("content of {}", file),
            path,
            group: group.map(str::to_owned),
        }
    }

    fn describe(catalog: &Catalog) -> Vec<String> {
        catalog
            .items()
            .iter()
            .map(|item| match item {
                CatalogItem::Snippet(i) => catalog.snippets()[*i].display_name.clone(),
                CatalogItem::Separator(name) => format!("--{}--", name),
            })
            .collect()
    }

    #[test]
    fn strips_numeric_prefixes_only() {
        assert_eq!(strip_numeric_prefix("01-work"), "work");
        assert_eq!(strip_numeric_prefix("123-a-b"), "a-b");
        assert_eq!(strip_numeric_prefix("work"), "work");
        assert_eq!(strip_numeric_prefix("-work"), "-work");
        assert_eq!(strip_numeric_prefix("01work"), "01work");
        assert_eq!(strip_numeric_prefix("v1-work"), "v1-work");
        assert_eq!(strip_numeric_prefix("01-"), "");
    }

    #[test]
    fn ungrouped_first_then_groups_by_folder_name() {
        let catalog: Catalog = vec![
            candidate("b.txt", None),
            candidate("a.txt", None),
            candidate("z.txt", Some("02-misc")),
            candidate("y.txt", Some("01-work")),
        ]
        .into_iter()
        .collect();

        assert_eq!(describe(&catalog), vec!["a", "b", "--work--", "y", "--misc--", "z"]);
        let flat: Vec<_> = catalog.snippets().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(flat, vec!["a", "b", "y", "z"]);
    }

    #[test]
    fn sorting_ignores_case() {
        let catalog: Catalog = vec![
            candidate("beta.txt", None),
            candidate("Alpha.txt", None),
            candidate("x.txt", Some("b-group")),
            candidate("x2.txt", Some("A-group")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            describe(&catalog),
            vec!["Alpha", "beta", "--A-group--", "x2", "--b-group--", "x"]
        );
    }

    #[test]
    fn equal_names_keep_enumeration_order() {
        let mut first = candidate("Same.txt", None);
        first.content = "first".to_owned();
        let mut second = candidate("same.md", None);
        second.content = "second".to_owned();

        let catalog: Catalog = vec![first, second].into_iter().collect();
        let contents: Vec<_> = catalog.snippets().iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[test]
    fn duplicate_names_get_their_extension() {
        let catalog: Catalog = vec![candidate("note.txt", None), candidate("note.md", None)]
            .into_iter()
            .collect();

        let mut names: Vec<_> = catalog
            .snippets()
            .iter()
            .map(|s| s.display_name.as_str())
            .collect();
        names.sort();
        assert_eq!(names, vec!["note.md", "note.txt"]);
    }

    #[test]
    fn duplicate_without_extension_gets_a_trailing_dot() {
        let catalog: Catalog = vec![candidate("note", None), candidate("note.txt", None)]
            .into_iter()
            .collect();

        assert_eq!(describe(&catalog), vec!["note.", "note.txt"]);
    }

    #[test]
    fn duplicates_are_detected_across_groups() {
        let catalog: Catalog = vec![
            candidate("deploy.sh", None),
            candidate("deploy.md", Some("01-ops")),
            candidate("unique.txt", Some("01-ops")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            describe(&catalog),
            vec!["deploy.sh", "--ops--", "deploy.md", "unique"]
        );
    }

    #[test]
    fn display_names_are_unique_when_extensions_differ() {
        let catalog: Catalog = vec![
            candidate("a.txt", None),
            candidate("a.md", Some("g1")),
            candidate("a.rs", Some("g2")),
            candidate("b.txt", Some("g2")),
        ]
        .into_iter()
        .collect();

        let names: HashSet<_> = catalog.snippets().iter().map(|s| &s.display_name).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn same_name_and_extension_in_different_groups_stay_ambiguous() {
        let catalog: Catalog = vec![
            candidate("todo.txt", Some("01-home")),
            candidate("todo.txt", Some("02-work")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            describe(&catalog),
            vec!["--home--", "todo.txt", "--work--", "todo.txt"]
        );
    }

    #[test]
    fn ids_are_unique() {
        let catalog: Catalog = vec![candidate("a.txt", None), candidate("b.txt", None)]
            .into_iter()
            .collect();
        assert_ne!(catalog.snippets()[0].id, catalog.snippets()[1].id);
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        let catalog: Catalog = Vec::<Candidate>::new().into_iter().collect();
        assert!(catalog.is_empty());
        assert!(catalog.items().is_empty());
    }
}

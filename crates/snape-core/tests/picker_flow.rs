use snape_core::{
    load_catalog, CatalogItem, EventResult, PickerEvent, SelectionController, SnippetSource,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn groups_follow_ungrouped_snippets_in_folder_order() {
    let dir = tempdir().unwrap();
    write(dir.path(), "b.txt", "bee");
    write(dir.path(), "a.txt", "ay");
    write(dir.path(), "02-misc/z.txt", "zed");
    write(dir.path(), "01-work/y.txt", "why");

    let catalog = load_catalog(&SnippetSource::new(dir.path()));

    let flat: Vec<_> = catalog.snippets().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(flat, vec!["a", "b", "y", "z"]);

    let items: Vec<String> = catalog
        .items()
        .iter()
        .map(|item| match item {
            CatalogItem::Snippet(i) => catalog.snippets()[*i].name.clone(),
            CatalogItem::Separator(name) => format!("[{}]", name),
        })
        .collect();
    assert_eq!(items, vec!["a", "b", "[work]", "y", "[misc]", "z"]);

    let groups: Vec<_> = catalog
        .snippets()
        .iter()
        .map(|s| s.group.as_deref())
        .collect();
    assert_eq!(groups, vec![None, None, Some("01-work"), Some("02-misc")]);
}

#[test]
fn same_stem_files_are_shown_with_extensions() {
    let dir = tempdir().unwrap();
    write(dir.path(), "note.txt", "plain");
    write(dir.path(), "note.md", "# markdown");

    let catalog = load_catalog(&SnippetSource::new(dir.path()));
    let mut names: Vec<_> = catalog
        .snippets()
        .iter()
        .map(|s| s.display_name.as_str())
        .collect();
    names.sort();
    assert_eq!(names, vec!["note.md", "note.txt"]);
}

#[test]
fn filtering_by_typed_characters() {
    let dir = tempdir().unwrap();
    for name in ["apple", "letter", "mango", "steam", "zebra"] {
        write(dir.path(), &format!("{}.txt", name), "");
    }

    let mut picker = SelectionController::new(load_catalog(&SnippetSource::new(dir.path())));
    assert_eq!(picker.handle(PickerEvent::Char('/')), EventResult::Handled);
    picker.handle(PickerEvent::ArrowDown);
    picker.handle(PickerEvent::Char('t'));
    assert_eq!(picker.selected(), Some(0));
    picker.handle(PickerEvent::Char('e'));
    assert_eq!(picker.selected(), Some(0));

    let visible: Vec<_> = picker.flat_view().map(|s| s.name.as_str()).collect();
    assert_eq!(visible, vec!["letter", "steam"]);
}

#[test]
fn quick_select_emits_snippet_content() {
    let dir = tempdir().unwrap();
    for i in 0..10 {
        write(dir.path(), &format!("s{}.txt", i), &format!("body {}", i));
    }

    let mut picker = SelectionController::new(load_catalog(&SnippetSource::new(dir.path())));
    match picker.handle(PickerEvent::Char('c')) {
        EventResult::Selected(snippet) => assert_eq!(snippet.content, "body 2"),
        other => panic!("expected a selection, got {:?}", other),
    }
}

#[test]
fn empty_directory_is_seeded_with_samples() {
    let dir = tempdir().unwrap();
    let catalog = load_catalog(&SnippetSource::new(dir.path()));

    let names: Vec<_> = catalog.snippets().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["greeting", "hello", "hello-world"]);
    assert_eq!(catalog.snippets()[1].content, "Hello, World!");
}

#[test]
fn unlistable_root_gives_an_empty_catalog() {
    let dir = tempdir().unwrap();
    let not_a_dir = dir.path().join("file");
    fs::write(&not_a_dir, "x").unwrap();

    let catalog = load_catalog(&SnippetSource::new(&not_a_dir));
    assert!(catalog.is_empty());
}

#[test]
fn reloading_gives_fresh_ids() {
    let dir = tempdir().unwrap();
    write(dir.path(), "one.txt", "1");
    let source = SnippetSource::new(dir.path());

    let first = load_catalog(&source);
    let second = load_catalog(&source);
    assert_ne!(first.snippets()[0].id, second.snippets()[0].id);
}

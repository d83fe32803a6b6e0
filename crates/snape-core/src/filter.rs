use crate::models::Snippet;

/// Whether a snippet matches an already case-folded query.
pub fn matches(snippet: &Snippet, folded_query: &str) -> bool {
    folded_query.is_empty()
        || snippet.display_name.to_lowercase().contains(folded_query)
        || snippet.content.to_lowercase().contains(folded_query)
}

/// Positions in `snippets` whose display name or content contains `query`,
/// ignoring case. An empty query keeps every position.
pub fn filter_positions(snippets: &[Snippet], query: &str) -> Vec<usize> {
    let folded = query.to_lowercase();
    snippets
        .iter()
        .enumerate()
        .filter(|(_, snippet)| matches(snippet, &folded))
        .map(|(position, _)| position)
        .collect()
}

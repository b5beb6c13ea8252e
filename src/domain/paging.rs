// Paging query parameters

/// Names tolerated by named expansion even when a template does not declare them.
pub const PAGING_PARAMETERS: [&str; 3] = ["page", "size", "sort"];

/// Remove `page`, `size` and `sort` entries from the query of an already
/// expanded URI. Empty `&` segments are collapsed and a query left empty is
/// dropped together with its `?`. A `#fragment` is kept.
pub fn strip_paging_parameters(uri: &str) -> String {
    let (without_fragment, fragment) = match uri.find('#') {
        Some(index) => uri.split_at(index),
        None => (uri, ""),
    };

    let Some((base, query)) = without_fragment.split_once('?') else {
        return uri.to_string();
    };

    let kept: Vec<&str> = query
        .split('&')
        .filter(|entry| !entry.is_empty() && !is_paging_entry(entry))
        .collect();

    if kept.is_empty() {
        format!("{}{}", base, fragment)
    } else {
        format!("{}?{}{}", base, kept.join("&"), fragment)
    }
}

/// Only `name=value` entries count; a bare `page` is left alone.
fn is_paging_entry(entry: &str) -> bool {
    entry
        .split_once('=')
        .is_some_and(|(key, _)| PAGING_PARAMETERS.contains(&key))
}

//! Substring filter over the extracted URL list.

/// Keeps the URLs that contain `include` (case-sensitive), preserving order.
/// With no substring the list is returned unchanged.
pub fn filter_urls(urls: Vec<String>, include: Option<&str>) -> Vec<String> {
    match include {
        Some(needle) => urls.into_iter().filter(|u| u.contains(needle)).collect(),
        None => urls,
    }
}

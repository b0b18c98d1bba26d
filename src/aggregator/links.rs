//! Supporting-link extraction from per-category results.

use crate::types::{CategoryResults, SourceLink};

/// At most this many supporting links are kept.
const MAX_LINKS: usize = 3;

/// Flatten all results in category order into supporting links,
/// de-duplicating by exact URL. The first occurrence of a URL keeps its
/// title; the list is cut to [`MAX_LINKS`] only after the whole pass.
pub fn extract_links(categories: &[CategoryResults]) -> Vec<SourceLink> {
    let mut links: Vec<SourceLink> = Vec::new();
    for category in categories {
        for result in &category.results {
            if !links.iter().any(|link| link.url == result.url) {
                links.push(SourceLink {
                    title: result.title.clone(),
                    url: result.url.clone(),
                });
            }
        }
    }
    links.truncate(MAX_LINKS);
    links
}

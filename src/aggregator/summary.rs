//! Unified summary construction from per-category results.
//!
//! Seeds the combined answer with the most authoritative result,
//! borrows distinct sentences from the remaining sources up to a fixed
//! budget, and de-duplicates key points across all results.

use crate::types::{CategoryResults, SearchResult, UnifiedSummary};
use regex::Regex;
use std::sync::LazyLock;

/// Sentence budget for the combined answer.
const SENTENCE_BUDGET: usize = 4;

/// At most this many key points survive de-duplication.
const MAX_KEY_POINTS: usize = 5;

/// Trimmed sentence fragments shorter than this many characters are
/// treated as noise and dropped.
const MIN_SENTENCE_CHARS: usize = 11;

/// How many leading characters of a candidate sentence are probed
/// against the combined text when borrowing across sources.
const BORROW_PROBE_CHARS: usize = 20;

/// A period followed by whitespace. Splitting on this leaves the final
/// sentence's own period attached to its fragment, which is why a
/// non-empty combined answer always carries a doubled final period.
static SENTENCE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s+").unwrap());

/// Merge all category results into one [`UnifiedSummary`].
///
/// Returns `None` when no source contributed any result; callers render
/// that as "not enough information" rather than an error.
pub fn summarize(categories: &[CategoryResults], query: &str) -> Option<UnifiedSummary> {
    if categories.is_empty() {
        return None;
    }

    tracing::trace!(
        query,
        categories = categories.len(),
        "building unified summary"
    );

    // Flatten in category order, remembering which categories actually
    // contributed a result.
    let mut all_results: Vec<&SearchResult> = Vec::new();
    let mut source_names: Vec<String> = Vec::new();
    for category in categories {
        for result in &category.results {
            all_results.push(result);
            if !source_names.contains(&category.category) {
                source_names.push(category.category.clone());
            }
        }
    }

    if all_results.is_empty() {
        return None;
    }

    let key_points = dedup_key_points(&all_results);
    let primary = select_primary(&all_results)?;

    let pool: Vec<&str> = all_results
        .iter()
        .map(|result| result.summary.as_str())
        .filter(|summary| !summary.is_empty())
        .collect();
    let main_answer = combine_text(&primary.summary, &pool, SENTENCE_BUDGET);

    Some(UnifiedSummary {
        main_answer,
        key_points,
        sources: source_names,
    })
}

/// Pick the seed result by authority rank; between equally ranked
/// results the earliest in flattened order wins, and when nothing is
/// ranked the first result overall is the fallback.
///
/// Extracted as a separate function for testability.
pub(crate) fn select_primary<'a>(results: &[&'a SearchResult]) -> Option<&'a SearchResult> {
    results
        .iter()
        .copied()
        .min_by_key(|result| result.source.authority().unwrap_or(u8::MAX))
}

/// Collect key points in flattened order, dropping any candidate that
/// is a case-insensitive substring of an already accepted point, or
/// that contains one. First seen wins; the surviving list is cut to
/// [`MAX_KEY_POINTS`] only after the whole pass.
fn dedup_key_points(results: &[&SearchResult]) -> Vec<String> {
    let mut accepted: Vec<String> = Vec::new();
    for result in results {
        for point in &result.key_points {
            let lowered = point.to_lowercase();
            let duplicate = accepted.iter().any(|existing| {
                let existing_lowered = existing.to_lowercase();
                existing_lowered.contains(&lowered) || lowered.contains(&existing_lowered)
            });
            if !duplicate {
                accepted.push(point.clone());
            }
        }
    }
    accepted.truncate(MAX_KEY_POINTS);
    accepted
}

/// Split text into sentence fragments, discard short ones, and
/// re-attach a trailing period to each survivor.
///
/// Extracted as a separate function for testability.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_DELIMITER
        .split(text)
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() >= MIN_SENTENCE_CHARS)
        .map(|fragment| format!("{fragment}."))
        .collect()
}

/// Combine the seed text with sentences borrowed from the rest of the
/// pool, stopping at `max_sentences`.
///
/// The borrow pass only runs when the seed yielded fewer than three
/// sentences and the pool holds more than one text. At most one
/// sentence is borrowed per other text: the first whose leading
/// [`BORROW_PROBE_CHARS`] characters do not already appear in the
/// combined text, compared case-insensitively. The sentence budget is
/// re-checked before every borrow.
pub(crate) fn combine_text(seed: &str, pool: &[&str], max_sentences: usize) -> String {
    let seed_sentences = split_sentences(seed);
    let mut combined = seed_sentences
        .iter()
        .take(max_sentences)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    if seed_sentences.len() < 3 && pool.len() > 1 {
        for text in pool {
            if *text == seed {
                continue;
            }
            let candidate = split_sentences(text).into_iter().find(|sentence| {
                let probe: String = sentence
                    .to_lowercase()
                    .chars()
                    .take(BORROW_PROBE_CHARS)
                    .collect();
                !combined.to_lowercase().contains(&probe)
            });
            if let Some(sentence) = candidate {
                if SENTENCE_DELIMITER.split(&combined).count() < max_sentences {
                    combined.push(' ');
                    combined.push_str(&sentence);
                }
            }
        }
    }

    let kept: Vec<&str> = SENTENCE_DELIMITER
        .split(&combined)
        .filter(|fragment| !fragment.trim().is_empty())
        .take(max_sentences)
        .collect();
    if kept.is_empty() {
        String::new()
    } else {
        format!("{}.", kept.join(". "))
    }
}

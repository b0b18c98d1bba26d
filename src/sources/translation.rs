//! Keyword-gated placeholder for translation lookups.
//!
//! Activates when the query looks like a translation request and
//! returns a single canned record handing off to Google Translate. A
//! live translation backend has not been wired up yet.

use crate::adapter::SourceAdapter;
use crate::config::AggregatorConfig;
use crate::error::Result;
use crate::types::{SearchResult, SourceKind};

/// Phrases that mark a query as a translation request. Matched as
/// case-insensitive substrings; "what is" casts a deliberately wide
/// net, so plain definition queries activate this source too.
const TRANSLATION_KEYWORDS: &[&str] = &[
    "translate",
    "translation",
    "how do you say",
    "what is",
    "in spanish",
    "in french",
    "in hindi",
    "in chinese",
];

/// Translation placeholder adapter.
pub struct TranslationSource;

impl SourceAdapter for TranslationSource {
    async fn fetch(&self, query: &str, _config: &AggregatorConfig) -> Result<Vec<SearchResult>> {
        let lowered = query.to_lowercase();
        if !TRANSLATION_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            return Ok(vec![]);
        }

        tracing::trace!(query, "translation placeholder matched");

        Ok(vec![SearchResult {
            title: "Translation service".to_string(),
            summary: "To enable translation, integrate Google Translate API or LibreTranslate. \
                      This will provide translations across 100+ languages."
                .to_string(),
            key_points: vec![
                "Multi-language support".to_string(),
                "Text and phrase translation".to_string(),
                "Pronunciation guides".to_string(),
            ],
            thumbnail: None,
            url: format!(
                "https://translate.google.com/?text={}",
                urlencoding::encode(query)
            ),
            source: SourceKind::Translation,
        }])
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Translation
    }
}

//! Core types for normalised knowledge-source results and source identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single normalised result returned from a knowledge source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result (article, thread, or record name).
    pub title: String,
    /// A prose summary of the result content. Never empty.
    pub summary: String,
    /// Short structured facts attached to the result, shown as bullets.
    /// Empty when the provider offers no structured signal.
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Optional thumbnail image URL.
    pub thumbnail: Option<String>,
    /// Canonical URL for the result. Serves as the identity key for
    /// de-duplication downstream.
    pub url: String,
    /// Which knowledge source produced this result.
    pub source: SourceKind,
}

/// Knowledge sources that auragen can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Google — general web hits via the Programmable Search JSON API.
    Google,
    /// YouTube — video lookups via the YouTube Data API v3.
    YouTube,
    /// PokéAPI — structured creature records by exact or partial name.
    Pokemon,
    /// Minecraft Wiki — article search via the MediaWiki API.
    Minecraft,
    /// Reddit — community discussion threads from the public search listing.
    Reddit,
    /// Keyword-gated placeholder for programming documentation lookups.
    Programming,
    /// Keyword-gated placeholder for translation lookups.
    Translation,
    /// Wikipedia — encyclopaedic summaries via the MediaWiki and REST APIs.
    Wikipedia,
}

impl SourceKind {
    /// Returns the human-readable name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::YouTube => "YouTube",
            Self::Pokemon => "Pokémon",
            Self::Minecraft => "Minecraft",
            Self::Reddit => "Reddit",
            Self::Programming => "Programming",
            Self::Translation => "Translation",
            Self::Wikipedia => "Wikipedia",
        }
    }

    /// Returns the display label under which this source's results are
    /// grouped in aggregated output.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Google => "Google Results",
            Self::YouTube => "YouTube Videos",
            Self::Pokemon => "Pokémon Database",
            Self::Minecraft => "Minecraft Wiki",
            Self::Reddit => "Reddit Discussions",
            Self::Programming => "Programming Language Wikis",
            Self::Translation => "Translations",
            Self::Wikipedia => "Wikipedia Summary",
        }
    }

    /// Authority rank used when seeding the unified answer. Lower ranks
    /// win. Sources returning `None` never outrank a ranked source: the
    /// encyclopaedia is presumed the best narrative seed for a factual
    /// query, then the structured creature database, then the game wiki.
    pub fn authority(&self) -> Option<u8> {
        match self {
            Self::Wikipedia => Some(0),
            Self::Pokemon => Some(1),
            Self::Minecraft => Some(2),
            _ => None,
        }
    }

    /// Returns all available sources in registration order. This order
    /// fixes the category order of aggregated output.
    pub fn all() -> &'static [SourceKind] {
        &[
            Self::Google,
            Self::YouTube,
            Self::Pokemon,
            Self::Minecraft,
            Self::Reddit,
            Self::Programming,
            Self::Translation,
            Self::Wikipedia,
        ]
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One source's contribution for a query: a display category plus the
/// normalised results it produced. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResults {
    /// Display label for this group of results.
    pub category: String,
    /// Normalised results in provider order.
    pub results: Vec<SearchResult>,
}

/// The merged answer derived from all contributing sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedSummary {
    /// Combined prose answer, at most four sentences.
    pub main_answer: String,
    /// De-duplicated key points across all results, at most five.
    pub key_points: Vec<String>,
    /// Category labels that contributed at least one result, in
    /// first-seen order.
    pub sources: Vec<String>,
}

/// A supporting link shown beneath the unified answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceLink {
    /// Title of the linked result.
    pub title: String,
    /// De-duplicated target URL.
    pub url: String,
}

/// Everything produced for one query: the unified summary (absent when
/// no source had anything to say), supporting links, and the raw
/// per-category results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Merged summary, or `None` when every source came back empty.
    pub summary: Option<UnifiedSummary>,
    /// Up to three supporting links, de-duplicated by URL.
    pub links: Vec<SourceLink>,
    /// Per-category results in registration order, empty categories
    /// already removed.
    pub categories: Vec<CategoryResults>,
}

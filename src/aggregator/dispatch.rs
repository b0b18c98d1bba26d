//! Source dispatcher: concurrent fan-out across all configured sources.
//!
//! Queries every configured source concurrently for the same query,
//! groups each source's results under its display category, and drops
//! categories that came back empty. Category order always follows the
//! configured source order, never network completion order.

use crate::adapter::SourceAdapter;
use crate::config::AggregatorConfig;
use crate::sources::{
    GoogleSource, MinecraftSource, PokemonSource, ProgrammingSource, RedditSource,
    TranslationSource, WikipediaSource, YouTubeSource,
};
use crate::types::{CategoryResults, SearchResult, SourceKind};

/// Query all configured sources concurrently and group their results
/// by category.
///
/// # Pipeline
///
/// 1. Fan out to every source in `config.sources` with
///    [`futures::future::join_all`]
/// 2. Each source absorbs its own faults via [`SourceAdapter::search`];
///    a failed provider contributes nothing for this query
/// 3. Group results under display categories in configured order
/// 4. Drop categories with no results
pub async fn dispatch_all(query: &str, config: &AggregatorConfig) -> Vec<CategoryResults> {
    let futures: Vec<_> = config
        .sources
        .iter()
        .map(|&kind| async move { (kind, query_source(kind, query, config).await) })
        .collect();

    let settled = futures::future::join_all(futures).await;

    for (kind, results) in &settled {
        tracing::debug!(source = %kind, count = results.len(), "source settled");
    }

    into_categories(settled)
}

/// Query a single source, dispatching to the concrete adapter.
async fn query_source(
    kind: SourceKind,
    query: &str,
    config: &AggregatorConfig,
) -> Vec<SearchResult> {
    match kind {
        SourceKind::Google => GoogleSource::default().search(query, config).await,
        SourceKind::YouTube => YouTubeSource::default().search(query, config).await,
        SourceKind::Pokemon => PokemonSource::default().search(query, config).await,
        SourceKind::Minecraft => MinecraftSource::default().search(query, config).await,
        SourceKind::Reddit => RedditSource::default().search(query, config).await,
        SourceKind::Programming => ProgrammingSource.search(query, config).await,
        SourceKind::Translation => TranslationSource.search(query, config).await,
        SourceKind::Wikipedia => WikipediaSource::default().search(query, config).await,
    }
}

/// Group per-source outputs into labelled categories, dropping empty
/// ones. Input order is preserved.
pub(crate) fn into_categories(
    settled: Vec<(SourceKind, Vec<SearchResult>)>,
) -> Vec<CategoryResults> {
    settled
        .into_iter()
        .filter(|(_, results)| !results.is_empty())
        .map(|(kind, results)| CategoryResults {
            category: kind.category().to_string(),
            results,
        })
        .collect()
}

//! PokéAPI — structured creature records by exact or partial name.
//!
//! The query is slugified and tried as an exact record lookup. On a
//! miss, the full species listing is scanned for a partial match on the
//! slug's first four characters and the lookup is retried with the
//! matched name. Summary and key points are generated from structured
//! attributes, not free text.

use crate::adapter::SourceAdapter;
use crate::config::AggregatorConfig;
use crate::error::{AggregateError, Result};
use crate::http;
use crate::types::{SearchResult, SourceKind};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://pokeapi.co";

/// How many characters of the slug drive the partial-match fallback.
const PARTIAL_MATCH_CHARS: usize = 4;

/// PokéAPI adapter.
///
/// Second-highest authority source: its generated summary seeds the
/// unified answer when no encyclopaedia result is present.
pub struct PokemonSource {
    base_url: String,
}

impl Default for PokemonSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl PokemonSource {
    /// Override the API base URL. Intended for tests against a local
    /// mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl SourceAdapter for PokemonSource {
    async fn fetch(&self, query: &str, config: &AggregatorConfig) -> Result<Vec<SearchResult>> {
        tracing::trace!(query, "Pokémon lookup");

        let client = http::build_client(config)?;
        let slug = slugify(query);

        let response = client
            .get(format!("{}/api/v2/pokemon/{slug}", self.base_url))
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("PokéAPI request failed: {e}")))?;

        if response.status().is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| AggregateError::Http(format!("PokéAPI response read failed: {e}")))?;
            return build_result(&body).map(|result| vec![result]);
        }

        // Exact lookup missed; scan the species listing for a partial match.
        let response = client
            .get(format!("{}/api/v2/pokemon-species", self.base_url))
            .query(&[("limit", "1000")])
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("PokéAPI species request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AggregateError::Http(format!("PokéAPI species HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| AggregateError::Http(format!("PokéAPI response read failed: {e}")))?;

        let Some(name) = find_species_match(&body, &slug)? else {
            tracing::debug!(query, "no Pokémon species matched");
            return Ok(vec![]);
        };

        let response = client
            .get(format!("{}/api/v2/pokemon/{name}", self.base_url))
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("PokéAPI request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AggregateError::Http(format!("PokéAPI HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| AggregateError::Http(format!("PokéAPI response read failed: {e}")))?;

        build_result(&body).map(|result| vec![result])
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Pokemon
    }
}

/// Lowercase the query and strip everything but ASCII letters and digits.
pub(crate) fn slugify(query: &str) -> String {
    query
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[derive(Deserialize)]
struct Pokemon {
    name: String,
    height: i64,
    weight: i64,
    types: Vec<TypeSlot>,
    stats: Vec<StatSlot>,
    abilities: Vec<AbilitySlot>,
    sprites: Sprites,
}

#[derive(Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_ref: NamedResource,
}

#[derive(Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Deserialize)]
struct StatSlot {
    base_stat: i64,
}

#[derive(Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
}

#[derive(Deserialize)]
struct Sprites {
    other: OtherSprites,
}

#[derive(Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Artwork,
}

#[derive(Deserialize)]
struct Artwork {
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct SpeciesListing {
    results: Vec<NamedResource>,
}

/// Scan the bulk species listing for the first name containing the
/// slug's leading characters. An empty slug matches the first species
/// in the listing.
pub(crate) fn find_species_match(json: &str, slug: &str) -> Result<Option<String>> {
    let listing: SpeciesListing = serde_json::from_str(json)
        .map_err(|e| AggregateError::Parse(format!("Pokémon species listing: {e}")))?;
    let prefix: String = slug.chars().take(PARTIAL_MATCH_CHARS).collect();
    Ok(listing
        .results
        .into_iter()
        .find(|species| species.name.contains(&prefix))
        .map(|species| species.name))
}

/// Generate one normalised result from a Pokémon record's structured
/// attributes. Heights and weights arrive in decimetres and hectograms
/// and are shown in metres and kilograms.
///
/// Extracted as a separate function for testability with mock JSON.
pub(crate) fn build_result(json: &str) -> Result<SearchResult> {
    let data: Pokemon = serde_json::from_str(json)
        .map_err(|e| AggregateError::Parse(format!("Pokémon record: {e}")))?;

    let type_names: Vec<&str> = data
        .types
        .iter()
        .map(|slot| slot.type_ref.name.as_str())
        .collect();
    let hp = data
        .stats
        .first()
        .map(|slot| slot.base_stat)
        .ok_or_else(|| AggregateError::Parse("Pokémon record has no stats".into()))?;
    let abilities: Vec<&str> = data
        .abilities
        .iter()
        .map(|slot| slot.ability.name.as_str())
        .collect();

    Ok(SearchResult {
        title: capitalize(&data.name),
        summary: format!(
            "{} is a {} type Pokémon with {} HP.",
            data.name,
            type_names.join("/"),
            hp
        ),
        key_points: vec![
            format!("Type: {}", type_names.join(", ")),
            format!("Height: {}m", data.height as f64 / 10.0),
            format!("Weight: {}kg", data.weight as f64 / 10.0),
            format!("Abilities: {}", abilities.join(", ")),
        ],
        thumbnail: data.sprites.other.official_artwork.front_default,
        url: format!("https://www.pokemon.com/us/pokedex/{}", data.name),
        source: SourceKind::Pokemon,
    })
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

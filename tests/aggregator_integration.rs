//! Integration tests for the answer aggregation pipeline.
//!
//! These tests exercise the full group → summarize → extract-links
//! pipeline using synthetic per-source results and local mock servers
//! (no public network calls). Live source tests are marked `#[ignore]`
//! for manual/periodic validation.

use auragen::aggregator::links::extract_links;
use auragen::aggregator::summary::summarize;
use auragen::sources::{RedditSource, WikipediaSource};
use auragen::types::{Answer, CategoryResults, SearchResult};
use auragen::{AggregatorConfig, SourceAdapter, SourceKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_result(title: &str, url: &str, summary: &str, kind: SourceKind) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        summary: summary.to_string(),
        key_points: vec![],
        thumbnail: None,
        url: url.to_string(),
        source: kind,
    }
}

/// Simulate the aggregation pipeline from settled per-source results,
/// without network calls.
fn run_pipeline(settled: Vec<(SourceKind, Vec<SearchResult>)>, query: &str) -> Answer {
    // 1. Group non-empty source outputs under display categories.
    let categories: Vec<CategoryResults> = settled
        .into_iter()
        .filter(|(_, results)| !results.is_empty())
        .map(|(kind, results)| CategoryResults {
            category: kind.category().to_string(),
            results,
        })
        .collect();

    // 2. Merge everything into a unified summary.
    let summary = summarize(&categories, query);

    // 3. Extract supporting links.
    let links = extract_links(&categories);

    Answer {
        summary,
        links,
        categories,
    }
}

#[test]
fn full_pipeline_five_sources() {
    let google = vec![
        {
            let mut r = make_result(
                "Pikachu | Pokémon Wiki",
                "https://pokemon.fandom.com/wiki/Pikachu",
                "Pikachu is an Electric-type Pokémon introduced in Generation I",
                SourceKind::Google,
            );
            r.key_points = vec!["Mascot of the franchise".to_string()];
            r
        },
        make_result(
            "Pikachu - Bulbapedia",
            "https://bulbapedia.bulbagarden.net/wiki/Pikachu",
            "Pikachu is a short, chubby rodent Pokémon covered in yellow fur",
            SourceKind::Google,
        ),
    ];
    let youtube = vec![{
        let mut r = make_result(
            "Pikachu's Best Moments",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "A compilation of Pikachu's best anime moments",
            SourceKind::YouTube,
        );
        r.key_points = vec![
            "Uploaded by The Pokémon Channel".to_string(),
            "12,345,678 views".to_string(),
            "Duration: 10:24".to_string(),
        ];
        r
    }];
    let pokemon = vec![{
        let mut r = make_result(
            "Pikachu",
            "https://www.pokemon.com/us/pokedex/pikachu",
            "pikachu is a electric type Pokémon with 35 HP.",
            SourceKind::Pokemon,
        );
        r.key_points = vec![
            "Type: electric".to_string(),
            "Height: 0.4m".to_string(),
            "Weight: 6kg".to_string(),
            "Abilities: static, lightning-rod".to_string(),
        ];
        r
    }];
    let reddit = vec![{
        let mut r = make_result(
            "Why is Pikachu the mascot?",
            "https://www.reddit.com/r/pokemon/comments/x1/why_is_pikachu_the_mascot/",
            "Discussion thread on Reddit",
            SourceKind::Reddit,
        );
        r.key_points = vec![
            "1532 upvotes".to_string(),
            "208 comments".to_string(),
            "r/pokemon".to_string(),
        ];
        r
    }];
    let wikipedia = vec![make_result(
        "Pikachu",
        "https://en.wikipedia.org/wiki/Pikachu",
        "Pikachu is an Electric-type Pokémon species in the Pokémon franchise",
        SourceKind::Wikipedia,
    )];

    let answer = run_pipeline(
        vec![
            (SourceKind::Google, google),
            (SourceKind::YouTube, youtube),
            (SourceKind::Pokemon, pokemon),
            (SourceKind::Reddit, reddit),
            (SourceKind::Wikipedia, wikipedia),
        ],
        "pikachu",
    );

    // Category order follows registration order, not result volume.
    let labels: Vec<&str> = answer
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Google Results",
            "YouTube Videos",
            "Pokémon Database",
            "Reddit Discussions",
            "Wikipedia Summary"
        ]
    );

    let summary = answer.summary.expect("summary");

    // Wikipedia seeds the answer despite being the last category.
    assert!(
        summary
            .main_answer
            .starts_with("Pikachu is an Electric-type Pokémon species"),
        "answer was: {}",
        summary.main_answer
    );
    assert!(summary.main_answer.ends_with('.'));

    // All five categories are credited, once each.
    assert_eq!(summary.sources.len(), 5);
    assert_eq!(summary.sources[4], "Wikipedia Summary");

    // Eleven distinct key points were offered; only five survive.
    assert_eq!(summary.key_points.len(), 5);
    assert_eq!(summary.key_points[0], "Mascot of the franchise");

    // Links come from the first three results in category order.
    assert_eq!(answer.links.len(), 3);
    assert_eq!(answer.links[0].url, "https://pokemon.fandom.com/wiki/Pikachu");
    assert_eq!(
        answer.links[2].url,
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    );
}

#[test]
fn empty_settled_results_produce_empty_answer() {
    let answer = run_pipeline(
        vec![(SourceKind::Google, vec![]), (SourceKind::Reddit, vec![])],
        "nothing",
    );
    assert!(answer.summary.is_none());
    assert!(answer.links.is_empty());
    assert!(answer.categories.is_empty());
}

#[test]
fn unranked_sources_fall_back_to_first_result_as_seed() {
    let google = vec![make_result(
        "First hit",
        "https://example.com/first",
        "The first web hit explains the topic in one sentence",
        SourceKind::Google,
    )];
    let reddit = vec![make_result(
        "A thread",
        "https://www.reddit.com/r/topic/comments/1/a_thread/",
        "Community discussion adds practical advice about the topic",
        SourceKind::Reddit,
    )];

    let answer = run_pipeline(
        vec![(SourceKind::Google, google), (SourceKind::Reddit, reddit)],
        "topic",
    );

    let summary = answer.summary.expect("summary");
    assert!(summary.main_answer.starts_with("The first web hit"));
}

#[test]
fn duplicate_urls_collapse_across_categories() {
    let shared = "https://www.reddit.com/r/rust/comments/1/shared/";
    let google = vec![make_result(
        "From Google",
        shared,
        "A search hit pointing at a popular discussion thread",
        SourceKind::Google,
    )];
    let reddit = vec![
        make_result(
            "From Reddit",
            shared,
            "Discussion thread on Reddit",
            SourceKind::Reddit,
        ),
        make_result(
            "Another thread",
            "https://www.reddit.com/r/rust/comments/2/another/",
            "Discussion thread on Reddit",
            SourceKind::Reddit,
        ),
    ];

    let answer = run_pipeline(
        vec![(SourceKind::Google, google), (SourceKind::Reddit, reddit)],
        "rust",
    );

    assert_eq!(answer.links.len(), 2);
    // First occurrence keeps its title.
    assert_eq!(answer.links[0].title, "From Google");
    assert_eq!(answer.links[1].title, "Another thread");
}

#[tokio::test]
async fn failing_source_leaves_others_standing() {
    let server = MockServer::start().await;

    // Wikipedia's search endpoint falls over; Reddit's keeps working.
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "data": {
                    "children": [
                        {
                            "data": {
                                "title": "Borrow checker tips",
                                "selftext": "A collection of patterns that make the borrow checker easier to live with.",
                                "ups": 412,
                                "num_comments": 57,
                                "subreddit": "rust",
                                "permalink": "/r/rust/comments/1/borrow_checker_tips/"
                            }
                        }
                    ]
                }
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let wikipedia = WikipediaSource::default().with_base_url(server.uri());
    let reddit = RedditSource::default().with_base_url(server.uri());
    let config = AggregatorConfig::default();

    let settled = vec![
        (SourceKind::Reddit, reddit.search("rust", &config).await),
        (SourceKind::Wikipedia, wikipedia.search("rust", &config).await),
    ];

    let answer = run_pipeline(settled, "rust");

    assert_eq!(answer.categories.len(), 1);
    assert_eq!(answer.categories[0].category, "Reddit Discussions");
    let summary = answer.summary.expect("summary survives a failing source");
    assert_eq!(summary.sources, vec!["Reddit Discussions"]);
    assert_eq!(answer.links.len(), 1);
}

// ── Live integration tests (require network) ──────────────────────────
// Run with: cargo test --test aggregator_integration live_ -- --ignored

#[tokio::test]
#[ignore]
async fn live_default_roster_answers_factual_query() {
    let answer = auragen::ask_default("what is a ferris wheel")
        .await
        .expect("default config is valid");

    match answer.summary {
        Some(summary) => {
            assert!(!summary.main_answer.is_empty());
            assert!(summary.main_answer.ends_with('.'));
            assert!(!summary.sources.is_empty());
            assert!(summary.key_points.len() <= 5);
            assert!(answer.links.len() <= 3);
        }
        None => {
            // Network failures are acceptable in CI; just log.
            eprintln!("No source answered (acceptable in CI)");
        }
    }
}

#[tokio::test]
#[ignore]
async fn live_wikipedia_seeds_factual_answers() {
    let config = AggregatorConfig {
        sources: vec![SourceKind::Reddit, SourceKind::Wikipedia],
        ..Default::default()
    };

    let answer = auragen::ask("ferris wheel", &config)
        .await
        .expect("config is valid");

    match answer.summary {
        Some(summary) => {
            assert!(summary.sources.contains(&"Wikipedia Summary".to_string()));
            assert!(summary.main_answer.to_lowercase().contains("wheel"));
        }
        None => {
            eprintln!("No source answered (acceptable in CI)");
        }
    }
}

#[tokio::test]
#[ignore]
async fn live_pokemon_answers_creature_queries() {
    let config = AggregatorConfig {
        sources: vec![SourceKind::Pokemon],
        ..Default::default()
    };

    let answer = auragen::ask("pikachu", &config)
        .await
        .expect("config is valid");

    match answer.summary {
        Some(summary) => {
            assert!(summary.main_answer.contains("electric"));
            assert!(summary.key_points.iter().any(|p| p.starts_with("Type:")));
        }
        None => {
            eprintln!("PokéAPI unavailable (acceptable in CI)");
        }
    }
}

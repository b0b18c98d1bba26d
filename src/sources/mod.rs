//! Knowledge-source adapter implementations.
//!
//! Each module provides a struct implementing [`crate::adapter::SourceAdapter`]
//! that queries a specific provider's public API and normalises its results.

pub mod google;
pub mod minecraft;
pub mod pokemon;
pub mod programming;
pub mod reddit;
pub mod translation;
pub mod wikipedia;
pub mod youtube;

pub use google::GoogleSource;
pub use minecraft::MinecraftSource;
pub use pokemon::PokemonSource;
pub use programming::ProgrammingSource;
pub use reddit::RedditSource;
pub use translation::TranslationSource;
pub use wikipedia::WikipediaSource;
pub use youtube::YouTubeSource;

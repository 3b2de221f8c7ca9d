use super::normalizer::RawPokemon;
use crate::config::PokeApiConfig;
use async_trait::async_trait;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum PokedexError {
    #[error("Pokemon {name} not found")]
    NotFound { name: String },
    #[error("pokedex upstream failure: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Seam for the upstream pokedex lookup so tests can substitute a canned
/// source. Callers pass an already-lowercased species name.
#[async_trait]
pub trait PokemonDataSource: Send + Sync {
    async fn fetch(&self, species: &str) -> Result<RawPokemon, PokedexError>;
}

/// HTTP client for the public PokeAPI. One outbound call per fetch, no retries,
/// collaborator-default timeouts.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(config: &PokeApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PokemonDataSource for PokeApiClient {
    async fn fetch(&self, species: &str) -> Result<RawPokemon, PokedexError> {
        let url = format!("{}/pokemon/{}", self.base_url, species);
        debug!(%species, "fetching pokedex entry");

        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound {
                name: species.to_string(),
            });
        }

        let document = response
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        Ok(RawPokemon::new(document))
    }
}

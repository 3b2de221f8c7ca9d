use std::sync::Arc;

use super::client::{PokedexError, PokemonDataSource};
use super::description::render;
use super::normalizer::normalize;
use super::roles::{classify, MissingStatError};

/// Service composing the data source, normalizer, role classifier, and
/// renderer into the per-request description pipeline.
pub struct PokedexService<D> {
    source: Arc<D>,
}

impl<D> PokedexService<D>
where
    D: PokemonDataSource + 'static,
{
    pub fn new(source: Arc<D>) -> Self {
        Self { source }
    }

    /// Fetch, normalize, classify, and render one species. The name is
    /// lowercased here; nothing is cached between calls.
    pub async fn describe(&self, name: &str) -> Result<String, DescribeError> {
        let species = name.to_lowercase();
        let raw = self.source.fetch(&species).await?;
        let mut creature = normalize(&raw);
        creature.role_tags = classify(&creature.stats)?;
        Ok(render(&creature))
    }

    /// Describe two species and join the results with a blank line. The two
    /// lookups are independent and run concurrently; the first failure wins.
    pub async fn compare(&self, first: &str, second: &str) -> Result<String, DescribeError> {
        let (left, right) = tokio::try_join!(self.describe(first), self.describe(second))?;
        Ok(format!("{left}\n\n{right}"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    #[error(transparent)]
    Source(#[from] PokedexError),
    #[error(transparent)]
    MissingStat(#[from] MissingStatError),
}

mod client;
mod description;
mod normalizer;
mod roles;
mod service;

pub use client::{PokeApiClient, PokedexError, PokemonDataSource};
pub use description::render;
pub use normalizer::{normalize, NormalizedPokemon, RawPokemon};
pub use roles::{classify, MissingStatError, REQUIRED_STATS};
pub use service::{DescribeError, PokedexService};

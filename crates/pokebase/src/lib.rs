//! Domain crate for the Pokebase service.
//!
//! Two pipelines live here. The pokedex pipeline fetches a raw Pokémon document
//! from the upstream API, normalizes it into a compact record, derives battle
//! roles from base stats, and renders a fixed-template description. The advisor
//! pipeline composes templated prompts over a precomputed description corpus and
//! forwards them to a text-generation model.

pub mod advisor;
pub mod config;
pub mod error;
pub mod pokedex;
pub mod telemetry;

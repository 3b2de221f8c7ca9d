use clap::Args;
use pokebase::config::AppConfig;
use pokebase::error::AppError;
use pokebase::pokedex::{PokeApiClient, PokedexService};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DescribeArgs {
    /// Species name to describe (any casing)
    pub(crate) name: String,
    /// Second species: print both descriptions separated by a blank line
    #[arg(long)]
    pub(crate) against: Option<String>,
}

/// One-shot description lookup against the live upstream API. Needs no
/// completion-service credentials.
pub(crate) async fn run_describe(args: DescribeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = PokedexService::new(Arc::new(PokeApiClient::new(&config.pokeapi)));

    let output = match args.against {
        Some(second) => service.compare(&args.name, &second).await?,
        None => service.describe(&args.name).await?,
    };

    println!("{output}");
    Ok(())
}

mod cli;
mod infra;
mod oneshot;
mod routes;
mod server;

use pokebase::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::{api_router, ApiContext};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pokebase::advisor::{BattleAdvisor, DescriptionCorpus, GeminiClient};
use pokebase::config::AppConfig;
use pokebase::error::AppError;
use pokebase::pokedex::{PokeApiClient, PokedexService};
use pokebase::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let corpus = Arc::new(DescriptionCorpus::from_path(&config.corpus.path)?);
    info!(
        descriptions = corpus.len(),
        path = %config.corpus.path.display(),
        "loaded description corpus"
    );

    let pokedex = Arc::new(PokedexService::new(Arc::new(PokeApiClient::new(
        &config.pokeapi,
    ))));
    let advisor = Arc::new(BattleAdvisor::new(
        Arc::new(GeminiClient::new(&config.gemini)?),
        corpus,
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = api_router(ApiContext { pokedex, advisor })
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "pokebase api ready");

    axum::serve(listener, app).await?;
    Ok(())
}

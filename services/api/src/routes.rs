use crate::infra::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use pokebase::advisor::{BattleAdvisor, CompletionModel};
use pokebase::error::AppError;
use pokebase::pokedex::{PokedexService, PokemonDataSource};
use serde_json::json;
use std::sync::Arc;

/// Shared handler state: the two request-scoped pipelines behind their seams.
pub(crate) struct ApiContext<D, M> {
    pub(crate) pokedex: Arc<PokedexService<D>>,
    pub(crate) advisor: Arc<BattleAdvisor<M>>,
}

impl<D, M> Clone for ApiContext<D, M> {
    fn clone(&self) -> Self {
        Self {
            pokedex: self.pokedex.clone(),
            advisor: self.advisor.clone(),
        }
    }
}

pub(crate) fn api_router<D, M>(context: ApiContext<D, M>) -> Router
where
    D: PokemonDataSource + 'static,
    M: CompletionModel + 'static,
{
    Router::new()
        .route(
            "/api/v1/pokemon/strategy",
            post(strategy_endpoint::<D, M>),
        )
        .route(
            "/api/v1/pokemon/team-building",
            post(team_building_endpoint::<D, M>),
        )
        .route(
            "/api/v1/pokemon/compare/:name1/:name2",
            get(compare_endpoint::<D, M>),
        )
        .route("/api/v1/pokemon/:name", get(description_endpoint::<D, M>))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(context)
}

pub(crate) async fn description_endpoint<D, M>(
    State(context): State<ApiContext<D, M>>,
    Path(name): Path<String>,
) -> Result<String, AppError>
where
    D: PokemonDataSource + 'static,
    M: CompletionModel + 'static,
{
    Ok(context.pokedex.describe(&name).await?)
}

pub(crate) async fn compare_endpoint<D, M>(
    State(context): State<ApiContext<D, M>>,
    Path((name1, name2)): Path<(String, String)>,
) -> Result<String, AppError>
where
    D: PokemonDataSource + 'static,
    M: CompletionModel + 'static,
{
    Ok(context.pokedex.compare(&name1, &name2).await?)
}

pub(crate) async fn strategy_endpoint<D, M>(
    State(context): State<ApiContext<D, M>>,
    user_query: String,
) -> Result<Json<Option<String>>, AppError>
where
    D: PokemonDataSource + 'static,
    M: CompletionModel + 'static,
{
    Ok(Json(context.advisor.counter_strategy(&user_query).await?))
}

pub(crate) async fn team_building_endpoint<D, M>(
    State(context): State<ApiContext<D, M>>,
    user_query: String,
) -> Result<Json<Option<String>>, AppError>
where
    D: PokemonDataSource + 'static,
    M: CompletionModel + 'static,
{
    Ok(Json(context.advisor.recommend_team(&user_query).await?))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState,
    error::Result,
    models::{ListingEnvelope, ListingQuery, PopulateResponse, Product},
    planner,
    services::seed_service,
};

pub async fn populate(State(state): State<AppState>) -> Result<Json<PopulateResponse>> {
    seed_service::populate(state.store.as_ref(), state.seed_batch_size).await?;

    Ok(Json(PopulateResponse { message: "success" }))
}

pub async fn list_frontend(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.store.find_all().await?;

    Ok(Json(products))
}

pub async fn list_backend(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ListingEnvelope>> {
    let params = ListingQuery::from_pairs(pairs);
    let envelope = planner::list_products(state.store.as_ref(), state.page_math, &params).await?;

    Ok(Json(envelope))
}

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::gnews::{Endpoint, GNewsClient};

use super::errors::ApiError;
use super::models::{CATEGORIES, HeadlinesParams, SearchParams};

pub async fn search_handler(
    State(client): State<Arc<GNewsClient>>,
    Query(params): Query<SearchParams>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let upstream_params = params.normalize()?;
    let result = client.fetch(Endpoint::Search, &upstream_params).await;
    Ok((result.status, Json(result.body)))
}

pub async fn top_headlines_handler(
    State(client): State<Arc<GNewsClient>>,
    Query(params): Query<HeadlinesParams>,
) -> (StatusCode, Json<Value>) {
    let result = client.fetch(Endpoint::TopHeadlines, &params.normalize()).await;
    (result.status, Json(result.body))
}

pub async fn categories_handler() -> Json<Value> {
    Json(json!({ "categories": CATEGORIES }))
}

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::commands::AppState;
use crate::modules::content::{ContentItem, FeedKind, Region};
use crate::modules::provider::WatchTowerBoard;
use crate::shared::errors::AppResult;

/// `GET /watchtower/{region}/{kind}`
pub async fn get_feed(
    State(state): State<AppState>,
    Path((region, kind)): Path<(String, String)>,
) -> AppResult<Json<Vec<ContentItem>>> {
    let region: Region = region.parse()?;
    let kind: FeedKind = kind.parse()?;

    Ok(Json(state.aggregator.feed(region, kind).await))
}

/// `GET /watchtower/{region}`
pub async fn get_board(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> AppResult<Json<WatchTowerBoard>> {
    let region: Region = region.parse()?;

    Ok(Json(state.aggregator.board(region).await))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

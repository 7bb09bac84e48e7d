//! Item creation endpoint

use axum::{Router, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::state::AppState;
use super::types::{ApiErrorResponse, Json, Path};
use crate::domain::item::{ItemSelector, Person};

pub fn create_items_router() -> Router<AppState> {
    Router::new().route("/items/{item_id}", post(create_item))
}

/// Echo of a created item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateItemResponse {
    pub user_id: ItemSelector,
    pub body: Person,
}

/// Create an item for one of the fixed slots
#[utoipa::path(
    post,
    path = "/items/{item_id}",
    tag = "items",
    params(("item_id" = ItemSelector, Path, description = "Item slot, one of 1, 2 or 3")),
    request_body = Person,
    responses(
        (status = 200, description = "Item created", body = CreateItemResponse),
        (status = 422, description = "Invalid item slot or body", body = ApiErrorResponse),
    )
)]
pub async fn create_item(
    Path(item_id): Path<ItemSelector>,
    Json(body): Json<Person>,
) -> Json<CreateItemResponse> {
    Json(CreateItemResponse {
        user_id: item_id,
        body,
    })
}

//! JSON REST handlers for items.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use itemhub_app::ports::ItemRepository;
use itemhub_domain::error::{ItemHubError, NotFoundError, ValidationError};
use itemhub_domain::id::ItemId;
use itemhub_domain::item::{Item, ItemDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing an item.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Deserialize)]
pub struct ItemRequest {
    #[serde(default, alias = "nama")]
    pub name: Option<String>,
    #[serde(default, alias = "tanggal")]
    pub date: Option<String>,
    #[serde(default, alias = "alamat")]
    pub address: Option<String>,
}

/// Body accepted by the create and update endpoints. Anything other than a
/// JSON object is rejected by the extractor.
type ItemPayload = Result<Json<Map<String, Value>>, JsonRejection>;

impl ItemRequest {
    fn from_object(body: Map<String, Value>) -> Result<Self, ItemHubError> {
        Self::deserialize(Value::Object(body))
            .map_err(|err| ValidationError::InvalidBody(err.to_string()).into())
    }

    fn into_draft(self) -> Result<ItemDraft, ItemHubError> {
        let mut builder = ItemDraft::builder();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(date) = self.date {
            builder = builder.date(date);
        }
        if let Some(address) = self.address {
            builder = builder.address(address);
        }
        builder.build()
    }
}

/// `{"message": ...}` body used for confirmations.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Item>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Item>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Item>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// A path segment that is not a base-10 integer matches no item.
fn parse_id(raw: &str) -> Result<ItemId, ApiError> {
    ItemId::from_str(raw).map_err(|_| {
        ApiError::from(ItemHubError::from(NotFoundError {
            entity: "Item",
            id: raw.to_string(),
        }))
    })
}

/// `GET /items`: list every item.
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let items = state.item_service.list_items().await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `POST /items`: create an item with the next free id.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: ItemPayload,
) -> Result<CreateResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let draft = ItemRequest::from_object(body)?.into_draft()?;
    let created = state.item_service.create_item(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /items/:id`: replace every field of an existing item.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: ItemPayload,
) -> Result<UpdateResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let draft = ItemRequest::from_object(body)?.into_draft()?;
    let item_id = parse_id(&id)?;
    let updated = state.item_service.update_item(item_id, draft).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /items/:id`: remove an item.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let item_id = parse_id(&id)?;
    state.item_service.delete_item(item_id).await?;
    Ok(DeleteResponse::Deleted(Json(MessageBody {
        message: "Item deleted",
    })))
}

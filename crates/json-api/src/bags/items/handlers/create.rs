//! Add Bag Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sacola_app::domain::bags::models::{ItemUuid, NewItem};

use crate::{
    bags::{errors::into_status_error, responses::ItemResponse},
    extensions::*,
    state::State,
};

/// Add Bag Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddItemRequest {
    /// Item UUID; generated when omitted
    pub uuid: Option<Uuid>,

    /// Product to add
    pub product: Uuid,

    /// Number of units
    pub quantity: u32,
}

impl From<AddItemRequest> for NewItem {
    fn from(request: AddItemRequest) -> Self {
        NewItem {
            uuid: request
                .uuid
                .map_or_else(ItemUuid::new, ItemUuid::from_uuid),
            product: request.product.into(),
            quantity: request.quantity,
        }
    }
}

/// Add Bag Item Handler
#[endpoint(
    tags("bags"),
    summary = "Add Item to Bag",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Bag not found"),
        (status_code = StatusCode::CONFLICT, description = "Bag is closed, belongs to another merchant, or the item id is taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown product or invalid quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "bags.items.create",
    skip(bag, json, depot, res),
    fields(bag_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    bag: PathParam<Uuid>,
    json: JsonBody<AddItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let bag = bag.into_inner();

    tracing::Span::current().record("bag_uuid", tracing::field::display(bag));

    let item = state
        .app
        .bags
        .add_item(bag.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/bags/{bag}/items/{}", item.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}

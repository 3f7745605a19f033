//! Remove Bag Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    bags::{errors::into_status_error, responses::ItemResponse},
    extensions::*,
    state::State,
};

/// Remove Bag Item Handler
///
/// Returns the removed item.
#[endpoint(
    tags("bags"),
    summary = "Remove Item from Bag",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Bag or item not found"),
        (status_code = StatusCode::CONFLICT, description = "Bag is empty or closed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
#[tracing::instrument(
    name = "bags.items.delete",
    skip(bag, item, depot),
    fields(
        bag_uuid = tracing::field::Empty,
        item_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    bag: PathParam<Uuid>,
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let (bag, item) = (bag.into_inner(), item.into_inner());

    let span = tracing::Span::current();

    span.record("bag_uuid", tracing::field::display(bag));
    span.record("item_uuid", tracing::field::display(item));

    let removed = state
        .app
        .bags
        .remove_item(bag.into(), item.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(removed.into()))
}

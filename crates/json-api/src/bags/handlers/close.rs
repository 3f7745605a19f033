//! Close Bag Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    bags::{errors::into_status_error, responses::BagResponse},
    extensions::*,
    state::State,
};

/// Close Bag Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CloseBagRequest {
    /// `0` pays in cash, any other value pays by card terminal
    pub payment_method: i32,
}

/// Close Bag Handler
#[endpoint(
    tags("bags"),
    summary = "Close Bag",
    responses(
        (status_code = StatusCode::OK, description = "Bag closed"),
        (status_code = StatusCode::NOT_FOUND, description = "Bag not found"),
        (status_code = StatusCode::CONFLICT, description = "Bag is empty or already closed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "bags.close",
    skip(bag, json, depot),
    fields(bag_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    bag: PathParam<Uuid>,
    json: JsonBody<CloseBagRequest>,
    depot: &mut Depot,
) -> Result<Json<BagResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let bag = bag.into_inner();

    tracing::Span::current().record("bag_uuid", tracing::field::display(bag));

    let closed = state
        .app
        .bags
        .close_bag(bag.into(), json.into_inner().payment_method)
        .await
        .map_err(into_status_error)?;

    tracing::info!(bag_uuid = %bag, "closed bag");

    Ok(Json(closed.into()))
}

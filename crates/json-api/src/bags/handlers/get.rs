//! Get Bag Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    bags::{errors::into_status_error, responses::BagResponse},
    extensions::*,
    state::State,
};

/// Get Bag Handler
///
/// Returns a bag with its items, total and payment status.
#[endpoint(
    tags("bags"),
    summary = "Get Bag",
    responses(
        (status_code = StatusCode::OK, description = "Bag found"),
        (status_code = StatusCode::NOT_FOUND, description = "Bag not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "bags.get",
    skip(bag, depot),
    fields(bag_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    bag: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BagResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let bag = bag.into_inner();

    tracing::Span::current().record("bag_uuid", tracing::field::display(bag));

    let bag = state
        .app
        .bags
        .view_bag(bag.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(bag.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use sacola_app::domain::bags::{BagsServiceError, MockBagsService, models::BagUuid};

    use crate::test_helpers::{bags_service, make_bag, make_item};

    use super::*;

    fn make_service(bags: MockBagsService) -> Service {
        bags_service(bags, Router::with_path("bags/{bag}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200_with_items() -> TestResult {
        let uuid = BagUuid::new();
        let mut bag = make_bag(uuid);

        bag.items.push(make_item(uuid, 10_00, 2));
        bag.total = 20_00;

        let mut bags = MockBagsService::new();

        bags.expect_view_bag()
            .once()
            .withf(move |b| *b == uuid)
            .return_once(move |_| Ok(bag));

        bags.expect_add_item().never();
        bags.expect_remove_item().never();
        bags.expect_close_bag().never();

        let mut res = TestClient::get(format!("http://example.com/bags/{uuid}"))
            .send(&make_service(bags))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: BagResponse = res.take_json().await?;

        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.total, 20_00);
        assert_eq!(body.items.len(), 1);
        assert!(!body.closed);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_bag_returns_404() -> TestResult {
        let uuid = BagUuid::new();
        let mut bags = MockBagsService::new();

        bags.expect_view_bag()
            .once()
            .withf(move |b| *b == uuid)
            .return_once(|_| Err(BagsServiceError::BagNotFound));

        bags.expect_add_item().never();
        bags.expect_remove_item().never();
        bags.expect_close_bag().never();

        let res = TestClient::get(format!("http://example.com/bags/{uuid}"))
            .send(&make_service(bags))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let mut bags = MockBagsService::new();

        bags.expect_view_bag().never();

        let res = TestClient::get("http://example.com/bags/not-a-uuid")
            .send(&make_service(bags))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

//! Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use sacola_app::domain::bags::BagsServiceError;

pub(crate) fn into_status_error(error: BagsServiceError) -> StatusError {
    match error {
        BagsServiceError::BagNotFound => StatusError::not_found().brief("Bag not found"),
        BagsServiceError::ItemNotFound => StatusError::not_found().brief("Item not found in bag"),
        BagsServiceError::ProductNotFound => {
            StatusError::bad_request().brief("Product does not exist")
        }
        BagsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be at least one")
        }
        BagsServiceError::BagClosed => StatusError::conflict().brief("Bag is closed"),
        BagsServiceError::EmptyBag => StatusError::conflict().brief("Bag has no items"),
        BagsServiceError::MerchantMismatch => StatusError::conflict()
            .brief("Bag already holds products from a different merchant"),
        BagsServiceError::DuplicateItem => {
            StatusError::conflict().brief("Item id is already in use")
        }
        BagsServiceError::TotalOverflow => {
            warn!("bag total overflowed");

            StatusError::unprocessable_entity().brief("Bag total is too large")
        }
        BagsServiceError::Storage(source) => {
            error!("bag storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

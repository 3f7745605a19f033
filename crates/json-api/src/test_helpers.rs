//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use sacola_app::{
    context::AppContext,
    domain::{
        bags::{
            MockBagsService,
            models::{Bag, BagUuid, Item, ItemUuid},
        },
        products::models::{MerchantUuid, Product, ProductUuid},
    },
};

use crate::state::State;

pub(crate) fn make_bag(uuid: BagUuid) -> Bag {
    Bag::new(uuid, Timestamp::UNIX_EPOCH)
}

pub(crate) fn make_item(bag: BagUuid, price: u64, quantity: u32) -> Item {
    Item {
        uuid: ItemUuid::new(),
        quantity,
        bag,
        product: Product {
            uuid: ProductUuid::new(),
            name: "Esfiha".to_string(),
            price,
            merchant: MerchantUuid::new(),
        },
    }
}

pub(crate) fn state_with_bags(bags: MockBagsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(bags)))
}

pub(crate) fn bags_service(bags: MockBagsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_bags(bags)))
            .push(route),
    )
}

//! App Router

use salvo::Router;

use crate::{bags, healthcheck};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("bags/{bag}")
                .get(bags::get::handler)
                .push(Router::with_path("close").patch(bags::close::handler))
                .push(
                    Router::with_path("items")
                        .post(bags::items::create::handler)
                        .push(Router::with_path("{item}").delete(bags::items::delete::handler)),
                ),
        )
}

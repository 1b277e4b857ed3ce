//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use maud::html;
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{add_transaction_endpoint, get_budget_page, subtract_transaction_endpoint},
    endpoints,
    html::base,
    stores::{FallbackQueue, TransactionStore},
};

/// Return a router with all the app's routes.
pub fn build_router<T, Q>(state: AppState<T, Q>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    Q: FallbackQueue + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::BUDGET_VIEW, get(get_budget_page::<T>))
        .route(
            endpoints::ADD_TRANSACTION,
            post(add_transaction_endpoint::<T, Q>),
        )
        .route(
            endpoints::SUBTRACT_TRANSACTION,
            post(subtract_transaction_endpoint::<T, Q>),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the budget page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::BUDGET_VIEW)
}

async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        base(
            "Not Found",
            &html! {
                main class="flex flex-col items-center gap-4 p-8"
                {
                    h1 class="text-3xl font-bold" { "404 Not Found" }
                    p { "The page you are looking for does not exist." }
                    a href=(endpoints::BUDGET_VIEW) class="underline" { "Back to the budget" }
                }
            },
        ),
    )
        .into_response()
}

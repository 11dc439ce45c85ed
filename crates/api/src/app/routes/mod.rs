use axum::{
    Router,
    routing::{get, post},
};

pub mod account;
pub mod statement;
pub mod system;
pub mod transactions;

/// Endpoints reachable without the `cpf` identity header.
pub fn public_router() -> Router {
    Router::new().route("/account", post(account::create_account))
}

/// Endpoints that run behind the identity middleware.
pub fn identified_router() -> Router {
    Router::new()
        .route(
            "/account",
            get(account::get_account)
                .put(account::update_account)
                .delete(account::delete_account),
        )
        .route("/statement", get(statement::get_statement))
        .route("/statement/date", get(statement::get_statement_by_date))
        .route("/deposit", post(transactions::deposit))
        .route("/with-draw", post(transactions::withdraw))
        .route("/balance", get(transactions::balance))
}

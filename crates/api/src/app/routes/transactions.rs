use axum::{Json, extract::Extension, http::StatusCode};

use ledger_accounts::Amount;

use crate::app::{SharedStore, dto, errors::ApiError, extract::JsonBody};
use crate::context::CustomerContext;

pub async fn deposit(
    Extension(store): Extension<SharedStore>,
    Extension(customer): Extension<CustomerContext>,
    JsonBody(body): JsonBody<dto::TransactionRequest>,
) -> Result<StatusCode, ApiError> {
    let entry = store.deposit(customer.cpf(), body.description, body.amount)?;

    tracing::info!(cpf = customer.cpf(), amount = entry.amount, "deposit recorded");
    Ok(StatusCode::CREATED)
}

pub async fn withdraw(
    Extension(store): Extension<SharedStore>,
    Extension(customer): Extension<CustomerContext>,
    JsonBody(body): JsonBody<dto::TransactionRequest>,
) -> Result<StatusCode, ApiError> {
    let amount = body.amount;
    let entry = store
        .withdraw(customer.cpf(), body.description, amount)
        .inspect_err(|e| {
            tracing::warn!(cpf = customer.cpf(), amount, error = %e, "withdrawal rejected");
        })?;

    tracing::info!(cpf = customer.cpf(), amount = entry.amount, "withdrawal recorded");
    Ok(StatusCode::CREATED)
}

/// Current balance as a bare JSON number.
pub async fn balance(Extension(customer): Extension<CustomerContext>) -> Json<Amount> {
    Json(Amount(customer.account().balance()))
}

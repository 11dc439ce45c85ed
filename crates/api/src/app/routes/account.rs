use axum::{Json, extract::Extension, http::StatusCode};

use ledger_accounts::Account;

use crate::app::{SharedStore, dto, errors::ApiError, extract::JsonBody};
use crate::context::CustomerContext;

pub async fn create_account(
    Extension(store): Extension<SharedStore>,
    JsonBody(body): JsonBody<dto::CreateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    let account = store.create(body.cpf, body.name).inspect_err(|e| {
        tracing::info!(error = %e, "account creation rejected");
    })?;

    tracing::info!(cpf = account.cpf(), id = %account.id(), "account created");
    Ok(StatusCode::CREATED)
}

pub async fn get_account(Extension(customer): Extension<CustomerContext>) -> Json<Account> {
    Json(customer.into_account())
}

pub async fn update_account(
    Extension(store): Extension<SharedStore>,
    Extension(customer): Extension<CustomerContext>,
    JsonBody(body): JsonBody<dto::UpdateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    let account = store.update_name(customer.cpf(), body.name)?;

    tracing::info!(cpf = account.cpf(), name = account.name(), "account renamed");
    Ok(StatusCode::CREATED)
}

pub async fn delete_account(
    Extension(store): Extension<SharedStore>,
    Extension(customer): Extension<CustomerContext>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let remaining = store.delete(customer.cpf())?;

    tracing::info!(cpf = customer.cpf(), remaining = remaining.len(), "account deleted");
    Ok(Json(remaining))
}

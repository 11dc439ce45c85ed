use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use ledger_accounts::{Account, AccountStore};
use ledger_core::DomainError;

use crate::app::{SharedStore, errors::ApiError};
use crate::context::CustomerContext;

/// Header carrying the caller's tax id.
pub const CPF_HEADER: &str = "cpf";

#[derive(Clone)]
pub struct IdentityState {
    pub store: SharedStore,
}

/// Resolve the caller from the `cpf` header before the handler runs.
///
/// On a miss the request is answered with 400 and the handler is never
/// invoked.
pub async fn identity_middleware(
    State(state): State<IdentityState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let account = resolve_customer(req.headers(), state.store.as_ref())?;

    req.extensions_mut().insert(CustomerContext::new(account));

    Ok(next.run(req).await)
}

/// Raw string match against stored tax ids; the header is not trimmed.
pub fn resolve_customer(headers: &HeaderMap, store: &dyn AccountStore) -> Result<Account, DomainError> {
    let cpf = headers
        .get(CPF_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(DomainError::AccountNotFound)?;

    store.find_by_cpf(cpf).ok_or_else(|| {
        tracing::debug!(cpf, "identity lookup missed");
        DomainError::AccountNotFound
    })
}

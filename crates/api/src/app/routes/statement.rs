use axum::{
    Json,
    extract::{Extension, Query},
};
use chrono::NaiveDate;

use ledger_accounts::{LedgerEntry, Statement};

use crate::app::dto;
use crate::context::CustomerContext;

pub async fn get_statement(Extension(customer): Extension<CustomerContext>) -> Json<Statement> {
    Json(customer.account().statement().clone())
}

/// Entries created on the requested local calendar day.
///
/// A missing or malformed `date` matches nothing.
pub async fn get_statement_by_date(
    Extension(customer): Extension<CustomerContext>,
    Query(query): Query<dto::StatementDateQuery>,
) -> Json<Vec<LedgerEntry>> {
    let day = query
        .date
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());

    let entries = match day {
        Some(day) => customer.account().statement().on_day(day),
        None => {
            tracing::debug!(date = ?query.date, "unparseable statement date");
            Vec::new()
        }
    };

    Json(entries)
}

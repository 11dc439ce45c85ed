use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub name: String,
}

/// Body of both `/deposit` and `/with-draw`.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    #[serde(default)]
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
}

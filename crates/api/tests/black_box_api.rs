use std::sync::Arc;

use chrono::Local;
use ledger_accounts::{AccountStore, InMemoryAccountStore};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    store: Arc<InMemoryAccountStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, isolated store, ephemeral port.
        let store = Arc::new(InMemoryAccountStore::new());
        let app = ledger_api::app::build_app(store.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            store,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_account(client: &reqwest::Client, srv: &TestServer, cpf: &str, name: &str) -> reqwest::Response {
    client
        .post(srv.url("/account"))
        .json(&json!({ "cpf": cpf, "name": name }))
        .send()
        .await
        .unwrap()
}

async fn post_tx(
    client: &reqwest::Client,
    srv: &TestServer,
    path: &str,
    cpf: &str,
    description: &str,
    amount: f64,
) -> reqwest::Response {
    client
        .post(srv.url(path))
        .header("cpf", cpf)
        .json(&json!({ "description": description, "amount": amount }))
        .send()
        .await
        .unwrap()
}

async fn get_json(client: &reqwest::Client, srv: &TestServer, path: &str, cpf: &str) -> serde_json::Value {
    let res = client.get(srv.url(path)).header("cpf", cpf).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK, "GET {path}");
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn deposit_then_overdraft_then_balance() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_account(&client, &srv, "111", "Alice").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.text().await.unwrap().is_empty());

    let res = post_tx(&client, &srv, "/deposit", "111", "pay", 100.0).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = post_tx(&client, &srv, "/with-draw", "111", "rent", 150.0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Insufficient funds!" }));

    let res = client.get(srv.url("/balance")).header("cpf", "111").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "100");

    // The rejected withdrawal left no trace, and the amount echoes as sent.
    let res = client.get(srv.url("/statement")).header("cpf", "111").send().await.unwrap();
    let raw = res.text().await.unwrap();
    assert!(raw.contains(r#""amount":100,"#), "statement body = {raw}");
    let statement: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(statement.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_account_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_account(&client, &srv, "222", "Bob").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = create_account(&client, &srv, "222", "Bob").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Costumer already exists!" }));

    let matching = srv
        .store
        .list()
        .into_iter()
        .filter(|a| a.cpf() == "222")
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn identity_header_is_required() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_account(&client, &srv, "111", "Alice").await;

    for path in ["/account", "/statement", "/balance", "/statement/date?date=2024-01-01"] {
        let res = client.get(srv.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "GET {path} without header");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Costumer not found!" }));
    }

    let res = post_tx(&client, &srv, "/deposit", "999", "pay", 10.0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Header values are matched verbatim.
    let res = client
        .get(srv.url("/balance"))
        .header("cpf", "111 ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert!(srv.store.find_by_cpf("999").is_none());
}

#[tokio::test]
async fn account_lifecycle_get_update_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_account(&client, &srv, "111", "Alice").await;
    create_account(&client, &srv, "333", "Carol").await;

    let account = get_json(&client, &srv, "/account", "111").await;
    assert_eq!(account["cpf"], "111");
    assert_eq!(account["name"], "Alice");
    assert!(account["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(account["statement"], json!([]));

    let res = client
        .put(srv.url("/account"))
        .header("cpf", "111")
        .json(&json!({ "name": "Alicia" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let renamed = get_json(&client, &srv, "/account", "111").await;
    assert_eq!(renamed["name"], "Alicia");
    assert_eq!(renamed["id"], account["id"]);

    let res = client
        .delete(srv.url("/account"))
        .header("cpf", "111")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let remaining: serde_json::Value = res.json().await.unwrap();
    let remaining = remaining.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["cpf"], "333");

    let res = client
        .get(srv.url("/account"))
        .header("cpf", "111")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn statement_lists_entries_in_order() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_account(&client, &srv, "111", "Alice").await;

    post_tx(&client, &srv, "/deposit", "111", "pay", 100.0).await;
    let res = post_tx(&client, &srv, "/with-draw", "111", "rent", 30.5).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let statement = get_json(&client, &srv, "/statement", "111").await;
    let entries = statement.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["description"], "pay");
    assert_eq!(entries[0]["type"], "credit");
    assert_eq!(entries[1]["description"], "rent");
    assert_eq!(entries[1]["type"], "debit");
    assert_eq!(entries[1]["amount"].as_f64(), Some(30.5));
    assert!(entries[1]["created_at"].is_string());

    let balance = get_json(&client, &srv, "/balance", "111").await;
    assert_eq!(balance.as_f64(), Some(69.5));
    assert_eq!(entries[0]["amount"], 100);
}

#[tokio::test]
async fn statement_by_date_filters_on_day() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_account(&client, &srv, "111", "Alice").await;
    post_tx(&client, &srv, "/deposit", "111", "pay", 100.0).await;

    let today = Local::now().date_naive();
    let today_path = format!("/statement/date?date={}", today.format("%Y-%m-%d"));
    let entries = get_json(&client, &srv, &today_path, "111").await;
    // Tolerate the deposit landing just across local midnight.
    let yesterday = today.pred_opt().unwrap();
    let yesterday_path = format!("/statement/date?date={}", yesterday.format("%Y-%m-%d"));
    let earlier = get_json(&client, &srv, &yesterday_path, "111").await;
    assert_eq!(
        entries.as_array().unwrap().len() + earlier.as_array().unwrap().len(),
        1
    );

    let entries = get_json(&client, &srv, "/statement/date?date=1999-01-01", "111").await;
    assert_eq!(entries, json!([]));

    let entries = get_json(&client, &srv, "/statement/date?date=not-a-date", "111").await;
    assert_eq!(entries, json!([]));

    let entries = get_json(&client, &srv, "/statement/date", "111").await;
    assert_eq!(entries, json!([]));
}

#[tokio::test]
async fn missing_text_fields_default_to_empty() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/account"))
        .json(&json!({ "cpf": "111" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(srv.store.find_by_cpf("111").unwrap().name(), "");

    let res = client
        .put(srv.url("/account"))
        .header("cpf", "111")
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(srv.url("/deposit"))
        .header("cpf", "111")
        .json(&json!({ "amount": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let statement = get_json(&client, &srv, "/statement", "111").await;
    assert_eq!(statement[0]["description"], "");
    assert_eq!(statement[0]["amount"], 5);
}

#[tokio::test]
async fn malformed_bodies_answer_with_error_json() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_account(&client, &srv, "111", "Alice").await;

    let bad_amount = client
        .post(srv.url("/deposit"))
        .header("cpf", "111")
        .json(&json!({ "description": "pay", "amount": "ten" }))
        .send()
        .await
        .unwrap();
    let not_json = client
        .post(srv.url("/with-draw"))
        .header("cpf", "111")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    let no_cpf = client
        .post(srv.url("/account"))
        .json(&json!({ "name": "Nobody" }))
        .send()
        .await
        .unwrap();

    for res in [bad_amount, not_json, no_cpf] {
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("application/json"), "content-type = {content_type}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()), "body = {body}");
    }

    // Nothing was recorded and no account was added.
    assert!(srv.store.find_by_cpf("111").unwrap().statement().is_empty());
    assert_eq!(srv.store.list().len(), 1);
}

//! Common test utilities for ledgerbook integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use ledgerbook_service::{create_router, AppState, ServiceConfig};
use ledgerbook_store::LedgerStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = LedgerStore::connect(temp_dir.path().join("ledgerbook.db"))
            .await
            .expect("Failed to open store");

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            database_path: temp_dir.path().join("ledgerbook.db").display().to_string(),
            token_secret: "test-secret".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(store, config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
        }
    }

    /// Register a user, returning their id.
    pub async fn register_user(&self, name: &str, phone: &str) -> i64 {
        let response = self
            .server
            .post("/register")
            .json(&serde_json::json!({
                "user_name": name,
                "mobile_phone_number": phone,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        body["user"]["user_id"].as_i64().expect("user_id in response")
    }

    /// Create a ledger, returning (ledger_id, access_key).
    pub async fn create_ledger(&self, user_id: i64, name: &str) -> (i64, String) {
        let response = self
            .server
            .post("/ledgers")
            .json(&serde_json::json!({
                "user_id": user_id,
                "ledger_name": name,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        (
            body["ledger_id"].as_i64().expect("ledger_id in response"),
            body["access_key"].as_str().expect("access_key in response").to_string(),
        )
    }

    /// Create a particular, returning its id.
    pub async fn create_particular(&self, ledger_id: i64, name: &str) -> i64 {
        let response = self
            .server
            .post("/particulars")
            .json(&serde_json::json!({
                "ledger_id": ledger_id,
                "particular_name": name,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        body["particular_id"].as_i64().expect("particular_id in response")
    }

    /// Create an entry, returning its id.
    pub async fn create_entry(
        &self,
        particular_id: i64,
        amount: f64,
        date: &str,
        description: &str,
        entry_type: &str,
    ) -> i64 {
        let response = self
            .server
            .post("/entries")
            .json(&serde_json::json!({
                "particular_id": particular_id,
                "amount": amount,
                "date": date,
                "description": description,
                "type": entry_type,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        body["entry_id"].as_i64().expect("entry_id in response")
    }
}

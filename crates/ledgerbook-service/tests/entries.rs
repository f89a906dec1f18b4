//! Particular and entry CRUD integration tests.

mod common;

use common::TestHarness;
use serde_json::json;

async fn seeded_particular(harness: &TestHarness, phone: &str) -> i64 {
    let user_id = harness.register_user("Ali", phone).await;
    let (ledger_id, _) = harness.create_ledger(user_id, "Shop").await;
    harness.create_particular(ledger_id, "Kitchen").await
}

#[tokio::test]
async fn particular_crud_roundtrip() {
    let harness = TestHarness::new().await;
    let user_id = harness.register_user("Ali", "0301-0000001").await;
    let (ledger_id, _) = harness.create_ledger(user_id, "Shop").await;
    let particular_id = harness.create_particular(ledger_id, "Rent").await;

    harness
        .server
        .put(&format!("/particulars/{particular_id}"))
        .json(&json!({ "particular_name": "Utilities" }))
        .await
        .assert_status_ok();

    let body: serde_json::Value = harness
        .server
        .get(&format!("/particulars/{ledger_id}"))
        .await
        .json();
    assert_eq!(body[0]["particular_name"], "Utilities");

    harness
        .server
        .delete(&format!("/particulars/{particular_id}"))
        .await
        .assert_status_ok();

    let body: serde_json::Value = harness
        .server
        .get(&format!("/particulars/{ledger_id}"))
        .await
        .json();
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn created_entry_is_listed_exactly_once() {
    let harness = TestHarness::new().await;
    let particular_id = seeded_particular(&harness, "0301-0000002").await;

    let entry_id = harness
        .create_entry(particular_id, 250.0, "2024-03-01", "groceries", "debit")
        .await;

    let body: serde_json::Value = harness
        .server
        .get(&format!("/entries/{particular_id}"))
        .await
        .json();
    let matching: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["entry_id"].as_i64() == Some(entry_id))
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["amount"], 250.0);
    assert_eq!(matching[0]["type"], "debit");
    assert_eq!(matching[0]["date"], "2024-03-01");
}

#[tokio::test]
async fn update_entry_overwrites_fields() {
    let harness = TestHarness::new().await;
    let particular_id = seeded_particular(&harness, "0301-0000003").await;
    let entry_id = harness
        .create_entry(particular_id, 100.0, "2024-01-01", "advance", "credit")
        .await;

    harness
        .server
        .put(&format!("/entries/{entry_id}"))
        .json(&json!({
            "amount": 80.0,
            "date": "2024-01-02",
            "description": "advance (corrected)",
            "type": "debit",
        }))
        .await
        .assert_status_ok();

    let body: serde_json::Value = harness
        .server
        .get(&format!("/entries/{particular_id}"))
        .await
        .json();
    assert_eq!(body[0]["amount"], 80.0);
    assert_eq!(body[0]["type"], "debit");
    assert_eq!(body[0]["description"], "advance (corrected)");
}

#[tokio::test]
async fn delete_entry_then_delete_again_is_not_found() {
    let harness = TestHarness::new().await;
    let particular_id = seeded_particular(&harness, "0301-0000004").await;
    let entry_id = harness
        .create_entry(particular_id, 10.0, "2024-02-02", "tea", "debit")
        .await;

    harness
        .server
        .delete(&format!("/entries/{entry_id}"))
        .await
        .assert_status_ok();

    harness
        .server
        .delete(&format!("/entries/{entry_id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn entry_with_invalid_type_is_rejected() {
    let harness = TestHarness::new().await;
    let particular_id = seeded_particular(&harness, "0301-0000005").await;

    let response = harness
        .server
        .post("/entries")
        .json(&json!({
            "particular_id": particular_id,
            "amount": 10.0,
            "date": "2024-02-02",
            "description": "tea",
            "type": "transfer",
        }))
        .await;

    assert!(response.status_code().is_client_error());
}

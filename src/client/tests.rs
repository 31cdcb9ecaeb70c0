//! Tests for the Qonto client operations

use super::*;
use crate::auth::{CallContext, Credentials};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::model::{BankAccount, TransactionStatus};
use crate::pagination::PageOptions;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TRANSACTION: &str = include_str!("../../tests/fixtures/transaction.json");
const ORGANIZATION: &str = include_str!("../../tests/fixtures/organization.json");
const ATTACHMENT: &str = include_str!("../../tests/fixtures/attachment.json");

fn client_for(server: &MockServer) -> QontoClient {
    let config = ClientConfig::builder().base_url(server.uri()).build();
    QontoClient::with_config(config).unwrap()
}

fn ctx() -> CallContext {
    CallContext::new().with_credentials(Credentials::new("test-organization", "s3cr3t"))
}

fn transaction(id: &str) -> Value {
    let mut value: Value = serde_json::from_str(TRANSACTION).unwrap();
    value["transaction_id"] = json!(id);
    value
}

fn meta(current: u32, total: u32, per_page: u32) -> Value {
    let next_page = (current < total).then_some(current + 1);
    let prev_page = (current > 1).then_some(current - 1);
    json!({
        "current_page": current,
        "next_page": next_page,
        "prev_page": prev_page,
        "total_pages": total,
        "total_count": total * per_page,
        "per_page": per_page
    })
}

fn account() -> BankAccount {
    let org: Value = serde_json::from_str(ORGANIZATION).unwrap();
    serde_json::from_value(org["bank_accounts"][0].clone()).unwrap()
}

// ============================================================================
// Organization Tests
// ============================================================================

#[tokio::test]
async fn test_get_organization_uses_slug_as_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/test-organization"))
        .and(header("Authorization", "test-organization:s3cr3t"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(format!(r#"{{"organization": {ORGANIZATION}}}"#), "application/json"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let org = client_for(&mock_server).get_organization(&ctx()).await.unwrap();

    assert_eq!(org.slug, "test-organization");
    assert_eq!(org.bank_accounts.len(), 1);
    assert_eq!(org.bank_accounts[0].iban, "FR7600000000000000000000000");
    assert_eq!(org.bank_accounts[0].balance_cents, 400_036);
}

#[tokio::test]
async fn test_get_bank_account_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/test-organization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organization": {"slug": "test-organization", "bank_accounts": []}
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get_bank_account(&ctx())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoBankAccount { ref organization } if organization == "test-organization"));
}

// ============================================================================
// Transactions Tests
// ============================================================================

#[tokio::test]
async fn test_get_transactions_omits_unset_paging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("slug", "test-bank-account"))
        .and(query_param("iban", "FR7600000000000000000000000"))
        .and(query_param_is_missing("current_page"))
        .and(query_param_is_missing("per_page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [transaction("t-1")],
            "meta": meta(1, 1, 100)
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server)
        .get_transactions(
            &ctx(),
            "test-bank-account",
            "FR7600000000000000000000000",
            &TransactionQuery::new(),
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "t-1");
    assert!(page.is_last());
}

#[tokio::test]
async fn test_get_transactions_sends_paging_and_filters_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("current_page", "3"))
        .and(query_param("per_page", "7"))
        .and(query_param("status", "pending"))
        .and(query_param("settled_at_from", "2018-10-01T00:00:00Z"))
        .and(query_param("sort_by", "settled_at:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [],
            "meta": meta(3, 5, 7)
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = TransactionQuery::new()
        .status(TransactionStatus::Pending)
        .settled_between(Some(Utc.with_ymd_and_hms(2018, 10, 1, 0, 0, 0).unwrap()), None)
        .sort_by("settled_at:asc")
        .page(3, 7);
    let page = client_for(&mock_server)
        .get_transactions(&ctx(), "slug", "iban", &query)
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.meta.next_page, Some(4));
}

#[test]
fn test_transaction_query_repeats_status() {
    let query = TransactionQuery::new()
        .status(TransactionStatus::Pending)
        .status(TransactionStatus::Completed);
    let params = query.query_params(&AccountSelector::new("s", "i"));
    let statuses: Vec<&str> = params
        .iter()
        .filter(|(k, _)| *k == "status")
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(statuses, vec!["pending", "completed"]);
}

#[tokio::test]
async fn test_get_transactions_validates_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = TransactionQuery::new();

    let err = client.get_transactions(&ctx(), "", "", &query).await.unwrap_err();
    assert!(matches!(err, Error::MissingBankAccountSlug));
    assert_eq!(err.to_string(), "Missing \"slug\" parameter");

    let err = client.get_transactions(&ctx(), "slug", "", &query).await.unwrap_err();
    assert!(matches!(err, Error::MissingBankAccountIban));

    let err = client
        .get_transactions_for_account(&ctx(), None, &query)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BankAccountNeeded));

    let err = client
        .get_all_transactions(&ctx(), "", "iban", &query)
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_get_transactions_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"message": "invalid iban"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get_transactions(&ctx(), "slug", "bad", &TransactionQuery::new())
        .await
        .unwrap_err();

    let api = err.as_api_error().expect("structured error");
    assert_eq!(api.status, 422);
    assert_eq!(api.message, "invalid iban");
    assert_eq!(api.method, reqwest::Method::GET);
}

#[tokio::test]
async fn test_get_transactions_keeps_mismatched_amounts() {
    let mock_server = MockServer::start().await;

    let mut tx = transaction("t-odd");
    tx["amount"] = json!(1.0);
    tx["amount_cents"] = json!(99_999);
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [tx],
            "meta": meta(1, 1, 1)
        })))
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server)
        .get_transactions(&ctx(), "slug", "iban", &TransactionQuery::new())
        .await
        .unwrap();

    assert_eq!(page.items[0].amount, 1.0);
    assert_eq!(page.items[0].amount_cents, 99_999);
}

#[tokio::test]
async fn test_get_all_transactions_follows_pages() {
    let mock_server = MockServer::start().await;

    for current in 1..=3u32 {
        Mock::given(method("GET"))
            .and(path("/transactions"))
            .and(query_param("current_page", current.to_string()))
            .and(query_param("status", "completed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "transactions": [
                    transaction(&format!("t-{current}-a")),
                    transaction(&format!("t-{current}-b"))
                ],
                "meta": meta(current, 3, 2)
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let account = account();
    let query = TransactionQuery::new().status(TransactionStatus::Completed);
    let all = client_for(&mock_server)
        .get_all_transactions_for_account(&ctx(), Some(&account), &query)
        .await
        .unwrap();

    let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["t-1-a", "t-1-b", "t-2-a", "t-2-b", "t-3-a", "t-3-b"]
    );
}

#[tokio::test]
async fn test_iter_transaction_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param_is_missing("current_page"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [transaction("first")],
            "meta": meta(1, 2, 1)
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("current_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [transaction("second")],
            "meta": meta(2, 2, 1)
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut iter = client.iter_transaction_pages("slug", "iban", 1);

    let (items, is_last) = iter.advance(&ctx()).await.unwrap();
    assert_eq!(items[0].id, "first");
    assert!(!is_last);

    let (items, is_last) = iter.advance(&ctx()).await.unwrap();
    assert_eq!(items[0].id, "second");
    assert!(is_last);

    assert!(iter.advance(&ctx()).await.unwrap_err().is_done());
}

// ============================================================================
// Labels / Memberships Tests
// ============================================================================

#[tokio::test]
async fn test_get_all_labels() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/labels"))
        .and(query_param("current_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "labels": [{"id": "l-1", "name": "Travel", "parent_id": null}],
            "meta": meta(1, 2, 1)
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/labels"))
        .and(query_param("current_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "labels": [{"id": "l-2", "name": "Hotel", "parent_id": "l-1"}],
            "meta": meta(2, 2, 1)
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let labels = client_for(&mock_server)
        .get_all_labels(&ctx(), PageOptions::default())
        .await
        .unwrap();

    assert_eq!(labels.len(), 2);
    assert_eq!(labels[1].parent_id.as_deref(), Some("l-1"));
}

#[tokio::test]
async fn test_get_memberships_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/memberships"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "memberships": [{"id": "m-1", "first_name": "Ada", "last_name": "Lovelace"}],
            "meta": meta(1, 1, 10)
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server)
        .get_memberships(&ctx(), PageOptions::new(0, 10))
        .await
        .unwrap();

    assert_eq!(page.items[0].last_name, "Lovelace");
    assert!(page.meta.is_first_page());
}

// ============================================================================
// Attachment Tests
// ============================================================================

#[tokio::test]
async fn test_get_attachment_empty_id() {
    let mock_server = MockServer::start().await;
    let err = client_for(&mock_server)
        .get_attachment(&ctx(), "")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AttachmentNeeded));
}

#[tokio::test]
async fn test_download_attachment_requires_url() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client.download_attachment(&ctx(), None).await.unwrap_err();
    assert!(matches!(err, Error::AttachmentNeeded));

    let mut attachment: crate::model::Attachment = serde_json::from_str(ATTACHMENT).unwrap();
    attachment.url = Some(String::new());
    let err = client
        .download_attachment(&ctx(), Some(&attachment))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingAttachmentUrl { .. }));
}

#[tokio::test]
async fn test_download_attachment_to_file() {
    let mock_server = MockServer::start().await;
    let id = "1ec373a5-e30d-4a70-948d-c8d49e4a4d31";

    let mut attachment: Value = serde_json::from_str(ATTACHMENT).unwrap();
    attachment["url"] = json!(format!("{}/files/doc.pdf", mock_server.uri()));

    Mock::given(method("GET"))
        .and(path(format!("/attachments/{id}")))
        .and(header("Authorization", "test-organization:s3cr3t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"attachment": attachment})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/doc.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let target = dir.path().join("doc.pdf");
    let saved = client_for(&mock_server)
        .download_attachment_to_file(&ctx(), id, &target)
        .await
        .unwrap();

    assert_eq!(saved.file_name, "doc.pdf");
    assert_eq!(saved.file_size, Some(49_599));
    assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.4");
}

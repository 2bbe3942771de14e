//! Integration tests for list management: overview, create (empty and
//! copied), active-list swapping, and delete with its invariants.

use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

const ADMIN_PASSWORD: &str = "test-secret";
const ADMIN_HEADER: &str = "X-Admin-Password";

/// Helper: start the server on a random port and return its base URL.
async fn start_test_server() -> (String, SocketAddr) {
    let store = Arc::new(wordwall_server::store::WordStore::seeded());
    let state = wordwall_server::state::AppState {
        store,
        admin_password: Arc::new(ADMIN_PASSWORD.to_string()),
    };

    let app = wordwall_server::routes::build_router(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), addr)
}

async fn get_overview(client: &reqwest::Client, base_url: &str) -> serde_json::Value {
    client
        .get(format!("{}/api/lists", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

/// Create a list through the API and return its id.
async fn create_list(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    copy_from_active: bool,
) -> String {
    let resp = client
        .post(format!("{}/api/lists", base_url))
        .header(ADMIN_HEADER, ADMIN_PASSWORD)
        .json(&json!({ "name": name, "copyFromActive": copy_from_active }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

async fn set_active(client: &reqwest::Client, base_url: &str, list_id: &str) -> reqwest::Response {
    client
        .put(format!("{}/api/lists/active", base_url))
        .header(ADMIN_HEADER, ADMIN_PASSWORD)
        .json(&json!({ "listId": list_id }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_initial_overview_has_one_active_list() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let overview = get_overview(&client, &base_url).await;
    let lists = overview["lists"].as_array().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["name"], "Workforce & Recrutare");
    assert_eq!(overview["activeListId"], lists[0]["id"]);
}

#[tokio::test]
async fn test_create_list_requires_password() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/lists", base_url))
        .json(&json!({ "name": "Round 2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_create_empty_list_does_not_change_active() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let before = get_overview(&client, &base_url).await;
    let id = create_list(&client, &base_url, "Round 2", false).await;

    let after = get_overview(&client, &base_url).await;
    let lists = after["lists"].as_array().unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[1]["id"].as_str().unwrap(), id, "creation order is kept");
    assert_eq!(lists[1]["name"], "Round 2");
    assert_eq!(after["activeListId"], before["activeListId"]);
}

#[tokio::test]
async fn test_create_list_blank_name_gets_placeholder() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/lists", base_url))
        .header(ADMIN_HEADER, ADMIN_PASSWORD)
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Untitled list");
}

#[tokio::test]
async fn test_copied_list_is_independent_of_original() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let original_id = get_overview(&client, &base_url).await["activeListId"]
        .as_str()
        .unwrap()
        .to_string();
    let copy_id = create_list(&client, &base_url, "Copy", true).await;

    // Vote in the original after the copy was taken
    let resp = client
        .post(format!("{}/api/words/vote", base_url))
        .json(&json!({ "word": "talent" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // The copy still shows the entries as they were at copy time
    let resp = set_active(&client, &base_url, &copy_id).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["activeListId"], copy_id.as_str());
    let talent = body["words"]
        .as_array()
        .unwrap()
        .iter()
        .find(|w| w["text"] == "talent")
        .expect("copy carries the seeded words");
    assert_eq!(talent["votes"], 1);

    // And voting in the copy leaves the original alone
    client
        .post(format!("{}/api/words/vote", base_url))
        .json(&json!({ "word": "echipă" }))
        .send()
        .await
        .unwrap();

    set_active(&client, &base_url, &original_id).await;
    let words: serde_json::Value = client
        .get(format!("{}/api/words", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let echipa = words
        .as_array()
        .unwrap()
        .iter()
        .find(|w| w["text"] == "echipă")
        .unwrap();
    assert_eq!(echipa["votes"], 1);
}

#[tokio::test]
async fn test_set_active_swaps_the_snapshot() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let empty_id = create_list(&client, &base_url, "Empty", false).await;
    let resp = set_active(&client, &base_url, &empty_id).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["words"].as_array().unwrap().is_empty());

    let words: serde_json::Value = client
        .get(format!("{}/api/words", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(words.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_set_active_validation_and_auth() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    // Missing id
    let resp = client
        .put(format!("{}/api/lists/active", base_url))
        .header(ADMIN_HEADER, ADMIN_PASSWORD)
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Unknown id
    let resp = set_active(&client, &base_url, "no-such-id").await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "List not found");

    // No password
    let resp = client
        .put(format!("{}/api/lists/active", base_url))
        .json(&json!({ "listId": "whatever" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_delete_last_list_is_rejected() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let only_id = get_overview(&client, &base_url).await["activeListId"]
        .as_str()
        .unwrap()
        .to_string();

    let resp = client
        .delete(format!("{}/api/lists/{}", base_url, only_id))
        .header(ADMIN_HEADER, ADMIN_PASSWORD)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Cannot delete the last word list");

    // The registry is unchanged
    let overview = get_overview(&client, &base_url).await;
    assert_eq!(overview["lists"].as_array().unwrap().len(), 1);
    assert_eq!(overview["activeListId"].as_str().unwrap(), only_id);
}

#[tokio::test]
async fn test_delete_unknown_list_is_400() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{}/api/lists/no-such-id", base_url))
        .header(ADMIN_HEADER, ADMIN_PASSWORD)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "List not found");
}

#[tokio::test]
async fn test_delete_active_list_promotes_replacement() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let original_id = get_overview(&client, &base_url).await["activeListId"]
        .as_str()
        .unwrap()
        .to_string();
    let second_id = create_list(&client, &base_url, "Second", false).await;
    set_active(&client, &base_url, &second_id).await;

    let resp = client
        .delete(format!("{}/api/lists/{}", base_url, second_id))
        .header(ADMIN_HEADER, ADMIN_PASSWORD)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["lists"].as_array().unwrap().len(), 1);
    assert_eq!(body["activeListId"].as_str().unwrap(), original_id);

    // The promoted list's words are being served again
    let words: serde_json::Value = client
        .get(format!("{}/api/words", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(words.as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_delete_list_requires_password() {
    let (base_url, _addr) = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{}/api/lists/some-id", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

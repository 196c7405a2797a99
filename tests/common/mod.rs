//! Helpers shared by the integration tests.

use once_cell::sync::Lazy;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::{Client, LocalResponse};
use serde_json::{json, Value};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
});

pub const T0: &str = "2022-07-09T10:00:00.000Z";
pub const T1: &str = "2022-07-09T11:30:00.000Z";

pub fn user(id: &str, handle: &str) -> Value {
    json!({
        "id": id,
        "name": format!("{handle} name"),
        "handle": handle,
        "avatarUrl": format!("https://example.com/{handle}.png"),
        "coverUrl": format!("https://example.com/{handle}-cover.png"),
        "createdAt": T0,
        "updatedAt": T0
    })
}

pub fn tweet(id: &str, user_id: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "message": format!("{id} says hi"),
        "createdAt": created_at,
        "updatedAt": created_at
    })
}

/// A client over a store file seeded with `doc`; `None` starts without a file.
pub fn client_with(doc: Option<Value>) -> (TempDir, Client) {
    Lazy::force(&TRACING);
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("db.json");
    if let Some(doc) = doc {
        std::fs::write(&path, doc.to_string()).expect("write fixture");
    }
    let figment = rocket::Config::figment()
        .merge(("db_path", path))
        .merge(("log_level", "off"));
    let client =
        Client::tracked(twitter_server::rocket_from(figment)).expect("valid rocket instance");
    (dir, client)
}

pub fn store(client: &Client) -> &twitter_server::Db {
    client.rocket().state::<twitter_server::Db>().expect("store is managed")
}

pub fn response_json_value(response: LocalResponse<'_>) -> Value {
    let body = response.into_string().expect("response body");
    serde_json::from_str(&body).expect("can't parse value")
}

/// Posts a GraphQL operation and returns the decoded response body.
pub fn graphql(client: &Client, query: &str, variables: Value) -> Value {
    let response = client
        .post("/graphql")
        .header(ContentType::JSON)
        .body(json!({ "query": query, "variables": variables }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    response_json_value(response)
}

/// `extensions.code` of every error in a response.
pub fn error_codes(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["extensions"]["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#![allow(dead_code)]
//! Shared helpers for the facade integration tests: canned schema and
//! row JSON plus the two mocks every test needs to bind a logger.

use mockito::{Matcher, Mock, ServerGuard};
use notebase_link::{CollectionLogger, NotebaseLinkClient};
use serde_json::{json, Value as JsonValue};

pub const COLLECTION_ID: &str = "col_1";
pub const COLLECTION_NAME: &str = "Experiments";

/// Property schema the mock collection advertises.
pub fn schema_properties() -> JsonValue {
    json!({
        "Name": {"id": "title", "type": "title", "title": {}},
        "Email": {"id": "e1", "type": "email", "email": {}},
        "Score": {"id": "s1", "type": "number", "number": {}},
        "Status": {"id": "st", "type": "select", "select": {"options": []}},
        "Tags": {"id": "t1", "type": "multi_select", "multi_select": {"options": []}},
        "Done": {"id": "d1", "type": "checkbox", "checkbox": {}}
    })
}

/// A minimal row with a title property.
pub fn row_json(id: &str, name: &str) -> JsonValue {
    json!({
        "id": id,
        "created_time": "2024-05-01T10:00:00.000Z",
        "archived": false,
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [{"type": "text", "text": {"content": name}}]
            }
        }
    })
}

/// One page of a paginated response.
pub fn page_body(results: Vec<JsonValue>, next_cursor: Option<&str>) -> String {
    json!({
        "results": results,
        "next_cursor": next_cursor,
        "has_more": next_cursor.is_some()
    })
    .to_string()
}

/// Query request body the logger sends: default creation-time sort and
/// page size, plus optional filter and cursor.
pub fn query_body(filter: Option<JsonValue>, cursor: Option<&str>) -> JsonValue {
    let mut body = json!({
        "sorts": [{"timestamp": "created_time", "direction": "ascending"}],
        "page_size": 100
    });
    if let Some(filter) = filter {
        body["filter"] = filter;
    }
    if let Some(cursor) = cursor {
        body["start_cursor"] = json!(cursor);
    }
    body
}

/// Equality filter on a single email property, as the codec builds it.
pub fn email_filter(value: &str) -> JsonValue {
    json!({"and": [{"property": "Email", "email": {"equals": value}}]})
}

/// Mount the search + retrieve mocks that logger construction hits.
pub async fn mount_binding(server: &mut ServerGuard) -> (Mock, Mock) {
    let search = server
        .mock("POST", "/v1/search")
        .match_body(Matcher::Json(json!({
            "query": COLLECTION_NAME,
            "filter": {"property": "object", "value": "collection"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "results": [{
                    "id": COLLECTION_ID,
                    "object": "collection",
                    "title": [{"type": "text", "text": {"content": COLLECTION_NAME}}]
                }],
                "next_cursor": null,
                "has_more": false
            })
            .to_string(),
        )
        .create_async()
        .await;

    let retrieve = server
        .mock("GET", format!("/v1/collections/{}", COLLECTION_ID).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": COLLECTION_ID,
                "title": [{"type": "text", "text": {"content": COLLECTION_NAME}}],
                "properties": schema_properties()
            })
            .to_string(),
        )
        .create_async()
        .await;

    (search, retrieve)
}

/// Client pointed at the mock server.
pub fn client_for(server: &ServerGuard) -> NotebaseLinkClient {
    NotebaseLinkClient::builder()
        .base_url(server.url())
        .bearer_token("test_token")
        .build()
        .expect("client should build")
}

/// Bind a logger against the mock server. The returned mocks are kept
/// alive by the caller for the duration of the test.
pub async fn connect_logger(server: &mut ServerGuard) -> (CollectionLogger, (Mock, Mock)) {
    let binding = mount_binding(server).await;
    let client = client_for(server);
    let logger = CollectionLogger::connect(client, COLLECTION_NAME)
        .await
        .expect("logger should bind");
    (logger, binding)
}

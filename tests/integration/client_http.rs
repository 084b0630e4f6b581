// tests/integration/client_http.rs
//! HTTP-boundary tests: the client against a mock Prismic repository.

use httpmock::prelude::*;
use prismic2site::api::{PrismicHttpClient, PrismicRepository};
use prismic2site::error::AppError;
use prismic2site::listing::Paginator;
use prismic2site::types::{ApiEndpoint, DocumentType, Uid};
use serde_json::{json, Value};

fn raw_document(uid: &str, title: &str) -> Value {
    json!({
        "id": format!("id-{}", uid),
        "uid": uid,
        "type": "posts",
        "first_publication_date": "2021-03-15T19:25:28+0000",
        "last_publication_date": "2021-03-16T10:00:00+0000",
        "data": {
            "title": title,
            "subtitle": format!("{} subtitle", title),
            "author": "Danilo Vieira"
        }
    })
}

fn search_body(results: Vec<Value>, next_page: Option<String>) -> Value {
    json!({
        "page": 1,
        "results_per_page": results.len(),
        "results_size": results.len(),
        "total_results_size": 3,
        "total_pages": 2,
        "next_page": next_page,
        "prev_page": null,
        "results": results
    })
}

fn client_for(server: &MockServer) -> PrismicHttpClient {
    let endpoint = ApiEndpoint::parse(&server.url("/api/v2")).unwrap();
    PrismicHttpClient::new(&endpoint, None).unwrap()
}

#[tokio::test]
async fn listing_resolves_the_master_ref_once_and_follows_cursors() {
    let server = MockServer::start_async().await;

    let index = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2");
            then.status(200).json_body(json!({
                "refs": [
                    {"id": "preview", "ref": "preview-token", "isMasterRef": false},
                    {"id": "master", "ref": "master-token", "isMasterRef": true, "label": "Master"}
                ]
            }));
        })
        .await;

    let first_page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/documents/search")
                .query_param("ref", "master-token")
                .query_param("pageSize", "2");
            then.status(200).json_body(search_body(
                vec![
                    raw_document("p0", "Primeiro"),
                    raw_document("p1", "Segundo"),
                ],
                Some(server.url("/api/v2/documents/search?cursor=abc")),
            ));
        })
        .await;

    let second_page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/documents/search")
                .query_param("cursor", "abc");
            then.status(200)
                .json_body(search_body(vec![raw_document("p2", "Terceiro")], None));
        })
        .await;

    let client = client_for(&server);
    let doc_type = DocumentType::new("posts").unwrap();

    let page = client.list_documents(&doc_type, 2).await.unwrap();
    assert_eq!(page.results.len(), 2);
    assert!(page.next_cursor.is_some());

    let paginator = Paginator::new(client, page);
    let rounds = paginator.load_remaining(None).await.unwrap();
    assert_eq!(rounds, 1);

    let state = paginator.snapshot();
    assert!(state.is_exhausted());
    let uids: Vec<_> = state.posts().iter().map(|p| p.uid.as_str()).collect();
    assert_eq!(uids, vec!["p0", "p1", "p2"]);

    // The master ref is cached for the lifetime of the client.
    assert_eq!(index.hits_async().await, 1);
    first_page.assert_async().await;
    second_page.assert_async().await;
}

#[tokio::test]
async fn get_document_by_key_returns_the_resolved_document() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2");
            then.status(200).json_body(json!({
                "refs": [{"id": "master", "ref": "master-token", "isMasterRef": true}]
            }));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/documents/search")
                .query_param("pageSize", "1");
            then.status(200).json_body(search_body(
                vec![json!({
                    "id": "id-hooks",
                    "uid": "como-utilizar-hooks",
                    "type": "posts",
                    "first_publication_date": "2021-03-15T19:25:28+0000",
                    "data": {
                        "title": "Como utilizar Hooks",
                        "author": "Joseph Oliveira",
                        "banner": {"url": "https://images.example/banner.png"},
                        "content": [
                            {"heading": "Proin et varius", "body": [
                                {"type": "paragraph", "text": "Nulla auctor sit amet", "spans": []}
                            ]}
                        ]
                    }
                })],
                None,
            ));
        })
        .await;

    let client = client_for(&server);
    let doc_type = DocumentType::new("posts").unwrap();
    let key = Uid::parse("como-utilizar-hooks").unwrap();

    let document = client.get_document_by_key(&doc_type, &key).await.unwrap();

    assert_eq!(document.uid.as_str(), "como-utilizar-hooks");
    assert_eq!(document.title, "Como utilizar Hooks");
    assert_eq!(
        document.banner_url.as_deref(),
        Some("https://images.example/banner.png")
    );
    assert_eq!(document.content.len(), 1);
    assert_eq!(
        document.content[0].body.as_plain_text(),
        "Nulla auctor sit amet"
    );
}

#[tokio::test]
async fn missing_document_surfaces_not_found() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2");
            then.status(200).json_body(json!({
                "refs": [{"id": "master", "ref": "master-token", "isMasterRef": true}]
            }));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/documents/search");
            then.status(200).json_body(search_body(vec![], None));
        })
        .await;

    let client = client_for(&server);
    let doc_type = DocumentType::new("posts").unwrap();
    let key = Uid::parse("nao-existe").unwrap();

    let err = client.get_document_by_key(&doc_type, &key).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn api_errors_propagate_with_status_and_message() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2");
            then.status(401).json_body(json!({
                "type": "api_security_error",
                "message": "access token is missing"
            }));
        })
        .await;

    let client = client_for(&server);
    let doc_type = DocumentType::new("posts").unwrap();

    let err = client.list_documents(&doc_type, 2).await.unwrap_err();
    match err {
        AppError::ContentApi {
            status, message, ..
        } => {
            assert_eq!(status.as_u16(), 401);
            assert!(message.contains("access token is missing"));
        }
        other => panic!("Expected ContentApi error, got {:?}", other),
    }
}

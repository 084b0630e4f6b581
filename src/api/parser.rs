// src/api/parser.rs
//! Parses raw API responses into the domain model.
//!
//! I/O stays in `client`; everything here is a pure function from
//! response text to domain values, so the whole layer is testable from
//! fixture JSON.

use super::client::ApiResponse;
use super::responses::{ApiErrorBody, ApiIndex, RawDocument, SearchResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::AppError;
use crate::model::{ContentBlock, PostDocument, PostPage, PostSummary};
use crate::types::{Cursor, DocumentType, Uid};
use reqwest::StatusCode;

/// Parse the repository index.
pub fn parse_index_response(result: ApiResponse<String>) -> Result<ApiIndex, AppError> {
    parse_api_response(result)
}

/// Parse a `documents/search` response into a page of post summaries.
pub fn parse_search_response(result: ApiResponse<String>) -> Result<PostPage, AppError> {
    let response: SearchResponse = parse_api_response(result)?;

    let next_cursor = match response.next_page.as_deref() {
        Some(url) => Some(Cursor::parse(url).map_err(|e| {
            AppError::MalformedResponse(format!("next_page is not a usable cursor: {}", e))
        })?),
        None => None,
    };

    Ok(PostPage {
        results: response.results.iter().map(normalize_summary).collect(),
        next_cursor,
    })
}

/// Parse a single-document search response.
///
/// An empty result set means the key resolves to nothing, surfaced as
/// `DocumentNotFound` so the caller can render its not-found state.
pub fn parse_document_response(
    result: ApiResponse<String>,
    doc_type: &DocumentType,
    key: &Uid,
) -> Result<PostDocument, AppError> {
    let response: SearchResponse = parse_api_response(result)?;

    match response.results.first() {
        Some(raw) => Ok(project_document(raw)),
        None => Err(AppError::DocumentNotFound {
            doc_type: doc_type.as_str().to_string(),
            key: key.as_str().to_string(),
        }),
    }
}

/// Normalization: project a raw document into a `PostSummary`.
///
/// Exactly five fields are consumed; everything else in the raw record is
/// discarded. The publication date passes through untouched. Pure: the
/// same raw record always yields the identical summary.
pub fn normalize_summary(raw: &RawDocument) -> PostSummary {
    PostSummary {
        uid: document_key(raw),
        first_publication_date: raw.first_publication_date.clone(),
        title: raw.data.title.clone().unwrap_or_default(),
        subtitle: raw.data.subtitle.clone().unwrap_or_default(),
        author: raw.data.author.clone().unwrap_or_default(),
    }
}

/// Project a raw document into a full `PostDocument`.
pub fn project_document(raw: &RawDocument) -> PostDocument {
    let content = raw
        .data
        .content
        .iter()
        .map(|section| ContentBlock {
            heading: section.heading.clone().unwrap_or_default(),
            body: section.body.clone(),
        })
        .collect();

    PostDocument {
        uid: document_key(raw),
        title: raw.data.title.clone().unwrap_or_default(),
        banner_url: raw.data.banner.as_ref().and_then(|b| b.url.clone()),
        author: raw.data.author.clone().unwrap_or_default(),
        first_publication_date: raw.first_publication_date.clone(),
        content,
    }
}

/// Identity of a document: its uid, falling back to the repository-wide
/// document id for documents published without one.
fn document_key(raw: &RawDocument) -> Uid {
    match raw.uid.as_deref() {
        Some(uid) if !uid.is_empty() => Uid::from_raw(uid.to_string()),
        _ => Uid::from_raw(raw.id.clone()),
    }
}

/// Parse any API response, dispatching on the HTTP status.
fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

/// Parse a successful response body.
fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        let preview = if body.len() > ERROR_BODY_PREVIEW_LENGTH {
            format!("{}...", &body[..ERROR_BODY_PREVIEW_LENGTH])
        } else {
            body.to_string()
        };

        AppError::Deserialization {
            source: e,
            body: preview,
        }
    })
}

/// Turn a non-2xx response into a structured error, reading the API's
/// error body when it parses.
fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|e| match (e.error_type, e.message) {
            (Some(t), Some(m)) => Some(format!("{}: {}", t, m)),
            (None, Some(m)) => Some(m),
            (Some(t), None) => Some(t),
            (None, None) => None,
        })
        .unwrap_or_else(|| format!("HTTP {}", status));

    AppError::ContentApi {
        status,
        message,
        url: url.to_string(),
    }
}

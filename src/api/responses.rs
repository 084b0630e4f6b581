// src/api/responses.rs
//! Raw wire shapes of the Prismic V2 document API.
//!
//! These types mirror the JSON the API returns. serde drops every field
//! not declared here, which is exactly the projection the site wants:
//! nothing outside the consumed fields is ever read.

use crate::model::RichText;
use serde::{Deserialize, Serialize};

/// The repository index returned by `GET {endpoint}`. Only the refs are
/// consumed; queries must carry the current master ref.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiIndex {
    pub refs: Vec<RefEntry>,
}

impl ApiIndex {
    /// The ref marked as master, if the repository reports one.
    pub fn master_ref(&self) -> Option<&RefEntry> {
        self.refs.iter().find(|r| r.is_master_ref)
    }
}

/// One entry of the repository's ref list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefEntry {
    pub id: String,
    #[serde(rename = "ref")]
    pub ref_token: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
    #[serde(default)]
    pub label: Option<String>,
}

/// Response of `GET {endpoint}/documents/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub page: u32,
    pub results_per_page: u32,
    pub results_size: u32,
    pub total_results_size: u32,
    pub total_pages: u32,
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
    pub results: Vec<RawDocument>,
}

/// A generic document as the source delivers it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub last_publication_date: Option<String>,
    #[serde(default)]
    pub data: RawData,
}

/// The custom-type payload of a document. Only the fields the site
/// consumes are declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub banner: Option<RawBanner>,
    /// Older revisions of the custom type shipped the section array under
    /// `group`; both spellings are accepted.
    #[serde(default, alias = "group")]
    pub content: Vec<RawSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBanner {
    #[serde(default)]
    pub url: Option<String>,
}

/// One `{heading, body}` section of a post body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub body: RichText,
}

/// Error body the API returns on non-2xx responses,
/// e.g. `{"type": "api_security_error", "message": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// src/model/post.rs
//! Post summaries, pages of summaries, and full post documents.

use super::RichText;
use crate::types::{Cursor, Uid};
use serde::{Deserialize, Serialize};

/// A post as it appears in the listing. Identity is the `uid`; immutable
/// once fetched.
///
/// `first_publication_date` is kept exactly as delivered by the source
/// (an ISO 8601 string, or absent); display formatting happens at render
/// time, never at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub uid: Uid,
    pub first_publication_date: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// One page of listing results. `next_cursor = None` signals the end of
/// pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub results: Vec<PostSummary>,
    pub next_cursor: Option<Cursor>,
}

/// A section of a post body: a heading followed by structured text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub heading: String,
    pub body: RichText,
}

/// A fully resolved post document, as handed to the post renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    pub uid: Uid,
    pub title: String,
    pub banner_url: Option<String>,
    pub author: String,
    pub first_publication_date: Option<String>,
    pub content: Vec<ContentBlock>,
}

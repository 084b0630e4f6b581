// src/api/mod.rs
//! Prismic API interaction — the ability to retrieve content from a repository.
//!
//! This module provides a data-oriented interface to the Prismic document
//! API, with clear separation between I/O operations, parsing, and
//! business logic.

pub mod client;
pub mod parser;
pub mod responses;

use crate::error::AppError;
use crate::model::{PostDocument, PostPage};
use crate::types::{Cursor, DocumentType, Uid};

/// The ability to retrieve content from a Prismic repository.
///
/// This is the fundamental algebra for API interaction. The listing
/// paginator and the page pipeline depend on this trait, never on HTTP
/// details. The integration is strictly read-only.
#[async_trait::async_trait]
pub trait PrismicRepository: Send + Sync {
    /// Fetch the first page of documents of a type, newest first.
    async fn list_documents(
        &self,
        doc_type: &DocumentType,
        page_size: usize,
    ) -> Result<PostPage, AppError>;

    /// Fetch a subsequent page via an opaque cursor, passed back verbatim.
    async fn fetch_by_cursor(&self, cursor: &Cursor) -> Result<PostPage, AppError>;

    /// Fetch a single document by its uid.
    async fn get_document_by_key(
        &self,
        doc_type: &DocumentType,
        key: &Uid,
    ) -> Result<PostDocument, AppError>;
}

// Re-export the public interface
pub use client::PrismicHttpClient;

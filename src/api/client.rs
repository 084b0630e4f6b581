// src/api/client.rs
//! Pure HTTP client wrapper for the Prismic document API.
//!
//! This module provides a thin wrapper around reqwest for making
//! HTTP requests to a Prismic repository. It handles the master-ref
//! handshake and basic request/response operations without parsing or
//! business logic.

use crate::constants::{LISTING_ORDERING, PRISMIC_MAX_PAGE_SIZE};
use crate::error::AppError;
use crate::types::{AccessToken, ApiEndpoint, Cursor, DocumentType, Uid};
use reqwest::{header, Client, Response};
use tokio::sync::OnceCell;
use url::Url;

/// A thin wrapper around a reqwest Client for Prismic API requests.
///
/// Every query must carry the repository's current master ref. The ref is
/// resolved lazily from the repository index on first use and cached for
/// the lifetime of the client.
pub struct PrismicHttpClient {
    client: Client,
    endpoint: ApiEndpoint,
    search_url: Url,
    access_token: Option<AccessToken>,
    master_ref: OnceCell<String>,
}

impl PrismicHttpClient {
    /// Creates a new HTTP client for a repository endpoint.
    pub fn new(
        endpoint: &ApiEndpoint,
        access_token: Option<AccessToken>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .build()?;

        let search_url =
            Url::parse(&format!("{}/documents/search", endpoint.as_str())).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API endpoint: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.clone(),
            search_url,
            access_token,
            master_ref: OnceCell::new(),
        })
    }

    /// Creates the default headers for Prismic API requests.
    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        headers
    }

    /// Makes a GET request to the given URL.
    pub async fn get(&self, url: Url) -> Result<Response, AppError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        log::debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Returns the repository's master ref, fetching the index on first use.
    async fn master_ref(&self) -> Result<&str, AppError> {
        let token = self
            .master_ref
            .get_or_try_init(|| self.fetch_master_ref())
            .await?;
        Ok(token.as_str())
    }

    /// Resolves the master ref from the repository index.
    async fn fetch_master_ref(&self) -> Result<String, AppError> {
        let mut url = self.endpoint.as_url().clone();
        if let Some(token) = &self.access_token {
            url.query_pairs_mut()
                .append_pair("access_token", token.as_str());
        }

        log::info!("Resolving master ref from {}", self.endpoint.as_str());
        let response = self.get(url).await?;
        let result = extract_response_text(response).await?;
        let index = super::parser::parse_index_response(result)?;

        let master = index.master_ref().ok_or_else(|| {
            AppError::MalformedResponse("Repository index carries no master ref".to_string())
        })?;

        log::debug!("Master ref resolved: {}", master.ref_token);
        Ok(master.ref_token.clone())
    }

    /// Builds a search URL carrying the ref, a query predicate, and the
    /// access token when configured.
    async fn search_request(&self, predicate: &str, page_size: usize) -> Result<Url, AppError> {
        let ref_token = self.master_ref().await?.to_string();
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("ref", &ref_token);
            pairs.append_pair("q", predicate);
            pairs.append_pair("pageSize", &page_size.to_string());
            if let Some(token) = &self.access_token {
                pairs.append_pair("access_token", token.as_str());
            }
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl super::PrismicRepository for PrismicHttpClient {
    async fn list_documents(
        &self,
        doc_type: &DocumentType,
        page_size: usize,
    ) -> Result<crate::model::PostPage, AppError> {
        let requested = page_size;
        let page_size = page_size.clamp(1, PRISMIC_MAX_PAGE_SIZE);
        if page_size != requested {
            log::warn!(
                "Requested page size {} outside API bounds, using {}",
                requested,
                page_size
            );
        }

        let predicate = format!("[[at(document.type,\"{}\")]]", doc_type.as_str());
        let mut url = self.search_request(&predicate, page_size).await?;
        url.query_pairs_mut()
            .append_pair("orderings", LISTING_ORDERING);

        let response = self.get(url).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_search_response(result)
    }

    async fn fetch_by_cursor(&self, cursor: &Cursor) -> Result<crate::model::PostPage, AppError> {
        // The cursor URL already carries ref, query, and token; it is
        // passed back verbatim, never reconstructed.
        let response = self.get(cursor.as_url().clone()).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_search_response(result)
    }

    async fn get_document_by_key(
        &self,
        doc_type: &DocumentType,
        key: &Uid,
    ) -> Result<crate::model::PostDocument, AppError> {
        let predicate = format!(
            "[[at(my.{}.uid,\"{}\")]]",
            doc_type.as_str(),
            key.as_str()
        );
        let url = self.search_request(&predicate, 1).await?;

        let response = self.get(url).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_document_response(result, doc_type, key)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

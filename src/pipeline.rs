// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of the
//! Prismic-to-site pipeline.
//!
//! Each trait describes a single capability, enabling testing each stage
//! in isolation.

use crate::error::AppError;
use crate::listing::ListingState;
use crate::model::PostDocument;
use crate::output::OutputReport;
use crate::types::RenderedPage;

/// What a pipeline run produces content for: the listing page, or one
/// post page.
#[derive(Debug, Clone)]
pub enum SiteContent {
    Listing(ListingState),
    Post(PostDocument),
}

/// Retrieves the content the run was asked for.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn fetch(&self) -> Result<SiteContent, AppError>;
}

/// Transforms fetched content into a rendered page.
pub trait PageComposer {
    fn compose(&self, content: &SiteContent) -> Result<RenderedPage, AppError>;
}

/// Delivers a rendered page to its destination.
pub trait PageDelivery {
    fn deliver(&self, content: &SiteContent, page: RenderedPage) -> Result<OutputReport, AppError>;
}

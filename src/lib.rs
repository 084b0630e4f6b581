// src/lib.rs
//! prismic2site library — renders a Prismic-backed blog into static HTML pages.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `SiteConfig`, `CommandLineInput`
//! - **Domain model** — `PostSummary`, `PostPage`, `PostDocument`, `RichText`
//! - **Domain types** — `Uid`, `DocumentType`, `Cursor`, `RenderedPage`
//! - **API client** — `PrismicRepository`, `PrismicHttpClient`, parsers
//! - **Listing** — `ListingState`, `load_more`, `Paginator`
//! - **Formatting** — `format_publication_date`, `estimate_reading_time`,
//!   page composition

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod listing;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod types;

// --- Error Handling ---
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SiteConfig};

// --- Domain Model ---
pub use crate::model::{ContentBlock, PostDocument, PostPage, PostSummary, RichText, TextNode};

// --- Domain Types ---
pub use crate::types::{AccessToken, ApiEndpoint, Cursor, DocumentType, RenderedPage, Uid};

// --- API Client ---
pub use crate::api::{PrismicHttpClient, PrismicRepository};

// --- Listing ---
pub use crate::listing::{load_more, ListingState, Paginator};

// --- Formatting ---
pub use crate::formatting::{compose_listing, compose_post, estimate_reading_time,
    format_publication_date};

// --- Pipeline ---
pub use crate::pipeline::{ContentSource, PageComposer, PageDelivery, SiteContent};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};

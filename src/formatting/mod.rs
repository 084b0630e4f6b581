// src/formatting/mod.rs
//! Turns domain content into rendered pages.
//!
//! Two pure transforms (publication-date formatting and reading-time
//! estimation) plus the Handlebars composition that assembles the
//! listing and post views.

mod date;
mod page_composer;
mod reading_time;

// Re-export the public interface
pub use date::format_publication_date;
pub use page_composer::{
    compose_listing, compose_post, ListingView, PostCard, PostView, SectionView,
};
pub use reading_time::estimate_reading_time;

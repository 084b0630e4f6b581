// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains. Reading
//! them should tell you how the site is assembled: how fast a person
//! reads, how much the source returns per page, how listings are ordered.

// ---------------------------------------------------------------------------
// Reading-time estimation
// ---------------------------------------------------------------------------

/// Words per minute assumed when estimating a post's reading time.
///
/// 200 wpm is the conventional figure for adult prose reading and the
/// value the original site used. Estimates round up to whole minutes.
pub const READING_SPEED_WORDS_PER_MINUTE: usize = 200;

// ---------------------------------------------------------------------------
// Prismic API boundaries
// ---------------------------------------------------------------------------

/// How many documents the Prismic API returns per page of results at most.
///
/// The API maximum is 100; requested page sizes are clamped to it.
pub const PRISMIC_MAX_PAGE_SIZE: usize = 100;

/// Page size used for listing queries when the caller does not choose one.
pub const DEFAULT_LISTING_PAGE_SIZE: usize = 20;

/// Ordering predicate for listing queries: newest publication first.
///
/// Ordering is the source's responsibility; results are never re-sorted
/// client-side.
pub const LISTING_ORDERING: &str = "[document.first_publication_date desc]";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

// src/listing.rs
//! The listing paginator: an append-only sequence of post summaries plus
//! the cursor to the next page.
//!
//! State transitions are explicit: `load_more` is a pure-at-the-edges
//! function from one immutable `ListingState` to the next, with exactly
//! one fetch in between. The rendering boundary reacts to the returned
//! state instead of mutating anything in place. `Paginator` wraps a state
//! behind a lock for view code that holds one handle across events.

use crate::api::PrismicRepository;
use crate::error::AppError;
use crate::model::{PostPage, PostSummary};
use crate::types::Cursor;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory listing state.
///
/// `posts` is append-only and ordered exactly as the source delivered the
/// pages (newest first); it is never re-sorted client-side. Uid uniqueness
/// is the source's contract: appends perform no dedup, so duplicates from
/// a misbehaving source pass through uncaught.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    posts: Vec<PostSummary>,
    next_cursor: Option<Cursor>,
}

impl ListingState {
    /// Seed a listing from a pre-fetched first page.
    pub fn initialize(page: PostPage) -> Self {
        Self {
            posts: page.results,
            next_cursor: page.next_cursor,
        }
    }

    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// Terminal state: no further fetch may be attempted and any
    /// load-more affordance must be hidden.
    pub fn is_exhausted(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Fetch the next page and return the successor state.
///
/// Fails fast with `NoMoreResults` when the state is exhausted; calling
/// on a null cursor is a precondition violation, not a no-op. Exactly one
/// network call is issued; a failed fetch propagates and the input state
/// is untouched. The new state appends the page's results in order and
/// adopts its cursor.
pub async fn load_more<R>(state: &ListingState, source: &R) -> Result<ListingState, AppError>
where
    R: PrismicRepository + ?Sized,
{
    let cursor = state.next_cursor().ok_or(AppError::NoMoreResults)?;

    log::debug!("Loading more posts from {}", cursor);
    let page = source.fetch_by_cursor(cursor).await?;
    log::debug!(
        "Fetched {} post(s), cursor {}",
        page.results.len(),
        if page.next_cursor.is_some() {
            "present"
        } else {
            "exhausted"
        }
    );

    let mut posts = state.posts.clone();
    posts.extend(page.results);

    Ok(ListingState {
        posts,
        next_cursor: page.next_cursor,
    })
}

/// A listing handle owning its state, safe to share with view code.
///
/// `load_more` is meant to be driven by user events; a second call while
/// one is still in flight would race on the state replacement. The
/// in-flight flag closes that gap: concurrent calls fail fast with
/// `FetchInProgress` instead of corrupting the append order.
pub struct Paginator<R> {
    source: R,
    state: Mutex<ListingState>,
    in_flight: AtomicBool,
}

impl<R: PrismicRepository> Paginator<R> {
    /// Create a paginator seeded from a pre-fetched first page.
    pub fn new(source: R, first_page: PostPage) -> Self {
        Self {
            source,
            state: Mutex::new(ListingState::initialize(first_page)),
            in_flight: AtomicBool::new(false),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ListingState {
        self.state.lock().clone()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.lock().is_exhausted()
    }

    /// Whether a `load_more` is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Fetch the next page and append it, returning how many posts were
    /// added. Rejects with `FetchInProgress` while another call is
    /// pending, and with `NoMoreResults` once exhausted.
    pub async fn load_more(&self) -> Result<usize, AppError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AppError::FetchInProgress);
        }

        let result = self.load_more_inner().await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn load_more_inner(&self) -> Result<usize, AppError> {
        let current = self.snapshot();
        let before = current.posts().len();

        let next = load_more(&current, &self.source).await?;
        let appended = next.posts().len() - before;

        *self.state.lock() = next;
        Ok(appended)
    }

    /// Keep loading until the listing is exhausted or `max_pages` rounds
    /// have run. Returns the number of rounds executed.
    pub async fn load_remaining(&self, max_pages: Option<u32>) -> Result<u32, AppError> {
        let mut rounds = 0u32;

        while !self.is_exhausted() {
            if let Some(max) = max_pages {
                if rounds >= max {
                    log::debug!("Reached maximum page limit: {}", max);
                    break;
                }
            }

            let appended = self.load_more().await?;
            rounds += 1;
            log::debug!("Round {}: appended {} post(s)", rounds, appended);
        }

        Ok(rounds)
    }

    /// Consume the paginator, yielding the source and the final state.
    pub fn into_parts(self) -> (R, ListingState) {
        (self.source, self.state.into_inner())
    }
}

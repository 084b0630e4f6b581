// tests/integration/pagination_flow.rs
//! Whole-flow tests: paginate a multi-page source to exhaustion, then
//! compose the real templates from the resulting state.

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use prismic2site::api::PrismicRepository;
use prismic2site::config::SiteConfig;
use prismic2site::error::AppError;
use prismic2site::formatting::{compose_listing, compose_post};
use prismic2site::listing::{ListingState, Paginator};
use prismic2site::model::{ContentBlock, PostDocument, PostPage, PostSummary, RichText};
use prismic2site::types::{Cursor, DocumentType, Uid};
use std::collections::VecDeque;

fn summary(uid: &str, title: &str) -> PostSummary {
    PostSummary {
        uid: Uid::parse(uid).unwrap(),
        first_publication_date: Some("2021-03-15T19:25:28+0000".to_string()),
        title: title.to_string(),
        subtitle: format!("{} subtitle", title),
        author: "Joseph Oliveira".to_string(),
    }
}

fn cursor(n: u32) -> Cursor {
    Cursor::parse(&format!("https://source.example/search?page={}", n)).unwrap()
}

/// Source that serves a fixed sequence of pages, one per fetch.
struct SequencedSource {
    pages: Mutex<VecDeque<PostPage>>,
}

impl SequencedSource {
    fn new(pages: Vec<PostPage>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
        }
    }
}

#[async_trait::async_trait]
impl PrismicRepository for SequencedSource {
    async fn list_documents(
        &self,
        _doc_type: &DocumentType,
        _page_size: usize,
    ) -> Result<PostPage, AppError> {
        self.fetch_by_cursor(&cursor(0)).await
    }

    async fn fetch_by_cursor(&self, _cursor: &Cursor) -> Result<PostPage, AppError> {
        self.pages
            .lock()
            .pop_front()
            .ok_or(AppError::NoMoreResults)
    }

    async fn get_document_by_key(
        &self,
        doc_type: &DocumentType,
        key: &Uid,
    ) -> Result<PostDocument, AppError> {
        Err(AppError::DocumentNotFound {
            doc_type: doc_type.as_str().to_string(),
            key: key.as_str().to_string(),
        })
    }
}

fn three_page_source() -> (PostPage, SequencedSource) {
    let first = PostPage {
        results: vec![summary("p0", "Primeiro"), summary("p1", "Segundo")],
        next_cursor: Some(cursor(2)),
    };
    let source = SequencedSource::new(vec![
        PostPage {
            results: vec![summary("p2", "Terceiro"), summary("p3", "Quarto")],
            next_cursor: Some(cursor(3)),
        },
        PostPage {
            results: vec![summary("p4", "Quinto")],
            next_cursor: None,
        },
    ]);
    (first, source)
}

#[tokio::test]
async fn two_load_more_calls_concatenate_three_pages_in_order() {
    let (first, source) = three_page_source();
    let paginator = Paginator::new(source, first);

    paginator.load_more().await.unwrap();
    paginator.load_more().await.unwrap();

    let state = paginator.snapshot();
    assert!(state.is_exhausted());

    let uids: Vec<_> = state.posts().iter().map(|p| p.uid.as_str()).collect();
    assert_eq!(uids, vec!["p0", "p1", "p2", "p3", "p4"]);

    // Exhausted is terminal: a further call fails fast.
    let err = paginator.load_more().await.unwrap_err();
    assert!(matches!(err, AppError::NoMoreResults));
}

#[tokio::test]
async fn exhausted_listing_renders_without_the_load_more_affordance() {
    let (first, source) = three_page_source();
    let paginator = Paginator::new(source, first);
    paginator.load_remaining(None).await.unwrap();

    let config = SiteConfig::default();
    let page = compose_listing(&paginator.snapshot(), &config).unwrap();
    let html = page.as_str();

    assert!(html.contains("Primeiro"));
    assert!(html.contains("Quinto"));
    assert!(html.contains("15 mar 2021"));
    assert!(!html.contains("Carregar mais posts"));
}

#[tokio::test]
async fn partial_listing_renders_the_load_more_affordance() {
    let (first, source) = three_page_source();
    let paginator = Paginator::new(source, first);
    paginator.load_remaining(Some(1)).await.unwrap();

    let config = SiteConfig::default();
    let page = compose_listing(&paginator.snapshot(), &config).unwrap();
    let html = page.as_str();

    assert!(html.contains("Quarto"));
    assert!(!html.contains("Quinto"));
    assert!(html.contains("Carregar mais posts"));
    assert!(html.contains("https://source.example/search?page=3"));
}

#[test]
fn post_page_renders_date_reading_time_and_sections() {
    // 450 words across two blocks: ceil(450 / 200) = 3 minutes.
    let long_body = vec!["palavra"; 430].join(" ");
    let document = PostDocument {
        uid: Uid::parse("como-utilizar-hooks").unwrap(),
        title: "Como utilizar Hooks".to_string(),
        banner_url: Some("https://images.example/banner.png".to_string()),
        author: "Joseph Oliveira".to_string(),
        first_publication_date: Some("2021-03-15T19:25:28+0000".to_string()),
        content: vec![
            ContentBlock {
                heading: "Proin et varius".to_string(),
                body: RichText::from_plain(&long_body),
            },
            ContentBlock {
                heading: "Cras laoreet mi".to_string(),
                body: RichText::from_plain(&vec!["texto"; 20].join(" ")),
            },
        ],
    };

    let config = SiteConfig::default();
    let page = compose_post(&document, &config).unwrap();
    let html = page.as_str();

    assert!(html.contains("Como utilizar Hooks | spacetraveling"));
    assert!(html.contains("15 mar 2021"));
    assert!(html.contains("3 min"));
    assert!(html.contains("https://images.example/banner.png"));
    assert!(html.contains("Proin et varius"));
    assert!(html.contains("Cras laoreet mi"));
}

#[test]
fn composing_a_state_with_an_unparseable_date_fails() {
    let state = ListingState::initialize(PostPage {
        results: vec![PostSummary {
            uid: Uid::parse("broken").unwrap(),
            first_publication_date: Some("yesterday".to_string()),
            title: "Broken".to_string(),
            subtitle: String::new(),
            author: String::new(),
        }],
        next_cursor: None,
    });

    let config = SiteConfig::default();
    assert!(matches!(
        compose_listing(&state, &config),
        Err(AppError::InvalidDate(_))
    ));
}

// src/formatting/page_composer.rs
//! Composes listing and post pages from domain content.
//!
//! This module builds serializable view models and renders them through
//! Handlebars templates, keeping markup out of Rust code.

use super::date::format_publication_date;
use super::reading_time::estimate_reading_time;
use crate::config::SiteConfig;
use crate::error::AppError;
use crate::listing::ListingState;
use crate::model::{PostDocument, PostSummary};
use crate::types::RenderedPage;
use handlebars::Handlebars;
use serde::Serialize;

const LISTING_TEMPLATE: &str = "listing";
const POST_TEMPLATE: &str = "post";

/// View model of the listing page.
#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub posts: Vec<PostCard>,
    /// Drives the load-more affordance; false once pagination is exhausted.
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// One card of the listing page.
#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub uid: String,
    pub href: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub published_on: String,
}

/// View model of a single post page.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub banner_url: Option<String>,
    pub author: String,
    pub published_on: String,
    pub reading_time: String,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// Render the listing page for a listing state.
pub fn compose_listing(
    state: &ListingState,
    config: &SiteConfig,
) -> Result<RenderedPage, AppError> {
    log::info!("Composing listing page with {} post(s)", state.posts().len());

    let engine = load_template(config, LISTING_TEMPLATE)?;
    let view = listing_view(state)?;
    render(&engine, LISTING_TEMPLATE, &view)
}

/// Render the page for a single post document.
pub fn compose_post(document: &PostDocument, config: &SiteConfig) -> Result<RenderedPage, AppError> {
    log::info!("Composing post page for '{}'", document.uid);

    let engine = load_template(config, POST_TEMPLATE)?;
    let view = post_view(document)?;
    render(&engine, POST_TEMPLATE, &view)
}

pub(crate) fn listing_view(state: &ListingState) -> Result<ListingView, AppError> {
    let posts = state
        .posts()
        .iter()
        .map(post_card)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListingView {
        posts,
        has_more: !state.is_exhausted(),
        next_cursor: state.next_cursor().map(|c| c.as_str().to_string()),
    })
}

fn post_card(summary: &PostSummary) -> Result<PostCard, AppError> {
    Ok(PostCard {
        uid: summary.uid.as_str().to_string(),
        href: format!("posts/{}.html", summary.uid),
        title: summary.title.clone(),
        subtitle: summary.subtitle.clone(),
        author: summary.author.clone(),
        published_on: formatted_date(summary.first_publication_date.as_deref())?,
    })
}

pub(crate) fn post_view(document: &PostDocument) -> Result<PostView, AppError> {
    let sections = document
        .content
        .iter()
        .map(|block| SectionView {
            heading: block.heading.clone(),
            paragraphs: block.body.paragraphs(),
        })
        .collect();

    Ok(PostView {
        title: document.title.clone(),
        banner_url: document.banner_url.clone(),
        author: document.author.clone(),
        published_on: formatted_date(document.first_publication_date.as_deref())?,
        reading_time: estimate_reading_time(&document.content),
        sections,
    })
}

/// Unpublished documents carry no date; everything else formats or fails.
fn formatted_date(date: Option<&str>) -> Result<String, AppError> {
    match date {
        Some(iso) => format_publication_date(iso),
        None => Ok(String::new()),
    }
}

/// Loads and registers a Handlebars template from the configured path.
fn load_template(config: &SiteConfig, name: &str) -> Result<Handlebars<'static>, AppError> {
    let template_path = config.get_template_path(name);
    let template_content =
        std::fs::read_to_string(&template_path).map_err(|e| AppError::TemplateNotFound {
            path: template_path.display().to_string(),
            source: e,
        })?;

    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string(name, &template_content)
        .map_err(|e| AppError::TemplateRender {
            name: name.to_string(),
            message: e.to_string(),
        })?;

    Ok(handlebars)
}

fn render<T: Serialize>(
    engine: &Handlebars<'static>,
    name: &str,
    view: &T,
) -> Result<RenderedPage, AppError> {
    let html = engine.render(name, view).map_err(|e| AppError::TemplateRender {
        name: name.to_string(),
        message: e.to_string(),
    })?;

    log::debug!("Rendered template '{}': {} bytes", name, html.len());
    Ok(RenderedPage::new(html))
}

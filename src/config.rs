// src/config.rs
use crate::constants::{DEFAULT_LISTING_PAGE_SIZE, PRISMIC_MAX_PAGE_SIZE};
use crate::error::AppError;
use crate::types::{AccessToken, ApiEndpoint, DocumentType, Uid, ValidationError};
use clap::Parser;
use std::path::PathBuf;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Uid of a single post to render; renders the listing page when omitted
    pub uid: Option<String>,

    /// Custom type the posts live under
    #[arg(long, default_value = "posts")]
    pub document_type: String,

    /// Documents requested per listing page (API maximum: 100)
    #[arg(long, default_value_t = DEFAULT_LISTING_PAGE_SIZE)]
    pub page_size: usize,

    /// Maximum number of load-more rounds after the first page
    /// (unlimited when omitted)
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Directory the rendered pages are written to
    #[arg(short, long, default_value = "./public")]
    pub out_dir: String,

    /// Directory holding the Handlebars templates
    #[arg(long, default_value = "./templates")]
    pub templates_dir: String,

    /// Pipe mode - print the rendered page to stdout instead of writing files
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved site configuration — validated and ready to drive all three
/// pipeline stages.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub endpoint: ApiEndpoint,
    pub access_token: Option<AccessToken>,
    pub document_type: DocumentType,
    pub page_size: usize,
    pub max_pages: Option<u32>,
    pub uid: Option<Uid>,
    pub out_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub pipe: bool,
    pub verbose: bool,
}

impl SiteConfig {
    /// Resolves a complete site configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let endpoint_str = std::env::var("PRISMIC_API_ENDPOINT").map_err(|_| {
            AppError::MissingConfiguration(
                "PRISMIC_API_ENDPOINT environment variable not set".to_string(),
            )
        })?;
        let endpoint = ApiEndpoint::parse(&endpoint_str)?;

        // Public repositories need no token; private ones reject queries
        // without it.
        let access_token = match std::env::var("PRISMIC_ACCESS_TOKEN") {
            Ok(token) => Some(AccessToken::new(token)?),
            Err(_) => None,
        };

        if cli.page_size == 0 || cli.page_size > PRISMIC_MAX_PAGE_SIZE {
            return Err(ValidationError::OutOfBounds {
                value: cli.page_size,
                min: 1,
                max: PRISMIC_MAX_PAGE_SIZE,
            }
            .into());
        }

        let uid = cli.uid.as_deref().map(Uid::parse).transpose()?;

        Ok(SiteConfig {
            endpoint,
            access_token,
            document_type: DocumentType::new(cli.document_type)?,
            page_size: cli.page_size,
            max_pages: cli.max_pages,
            uid,
            out_dir: PathBuf::from(cli.out_dir),
            templates_dir: PathBuf::from(cli.templates_dir),
            pipe: cli.pipe,
            verbose: cli.verbose,
        })
    }

    /// Returns the full path of a named template.
    pub fn get_template_path(&self, name: &str) -> PathBuf {
        self.templates_dir.join(format!("{}.hbs", name))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint: ApiEndpoint::parse("https://demo.cdn.prismic.io/api/v2")
                .expect("Default endpoint should be valid"),
            access_token: None,
            document_type: DocumentType::new("posts")
                .expect("Default document type should be valid"),
            page_size: DEFAULT_LISTING_PAGE_SIZE,
            max_pages: None,
            uid: None,
            out_dir: PathBuf::from("./public"),
            templates_dir: PathBuf::from("./templates"),
            pipe: false,
            verbose: false,
        }
    }
}

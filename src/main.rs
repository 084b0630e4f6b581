// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use prismic2site::api::{PrismicHttpClient, PrismicRepository};
use prismic2site::config::{CommandLineInput, SiteConfig};
use prismic2site::error::AppError;
use prismic2site::formatting::{compose_listing, compose_post, estimate_reading_time};
use prismic2site::listing::Paginator;
use prismic2site::output::{
    self, listing_output_path, post_output_path, DeliveryTarget, OutputPlan, OutputReport,
};
use prismic2site::pipeline::{ContentSource, PageComposer, PageDelivery, SiteContent};
use prismic2site::types::RenderedPage;
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("prismic2site.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline: fetch → compose → deliver.
async fn execute_pipeline(config: &SiteConfig) -> Result<(), AppError> {
    let pipeline = PrismicToSite::new(config);

    let content = pipeline.fetch().await?;
    let page = pipeline.compose(&content)?;
    let report = pipeline.deliver(&content, page)?;
    pipeline.report_completion(&content, &report);

    Ok(())
}

/// Orchestrates the retrieval, composition, and delivery of blog pages.
struct PrismicToSite<'a> {
    config: &'a SiteConfig,
}

impl<'a> PrismicToSite<'a> {
    fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Reports completion to the user with stats and delivery confirmations.
    fn report_completion(&self, content: &SiteContent, report: &OutputReport) {
        if self.config.pipe {
            return;
        }

        match content {
            SiteContent::Listing(state) => {
                println!(
                    "📄 Rendered listing with {} post(s){}.",
                    state.posts().len(),
                    if state.is_exhausted() {
                        ""
                    } else {
                        " (more pages left unfetched)"
                    }
                );
            }
            SiteContent::Post(document) => {
                println!(
                    "📄 Rendered post '{}' ({}).",
                    document.title,
                    estimate_reading_time(&document.content)
                );
            }
        }

        for completed in &report.completed {
            if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
                println!("✓ Page saved to {}", path.display());
            }
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for PrismicToSite<'_> {
    async fn fetch(&self) -> Result<SiteContent, AppError> {
        let client =
            PrismicHttpClient::new(&self.config.endpoint, self.config.access_token.clone())?;

        match &self.config.uid {
            Some(uid) => {
                log::info!(
                    "Retrieving '{}' document '{}'",
                    self.config.document_type,
                    uid
                );
                let document = client
                    .get_document_by_key(&self.config.document_type, uid)
                    .await?;
                Ok(SiteContent::Post(document))
            }
            None => {
                log::info!("Retrieving '{}' listing", self.config.document_type);
                let first_page = client
                    .list_documents(&self.config.document_type, self.config.page_size)
                    .await?;

                let paginator = Paginator::new(client, first_page);
                let rounds = paginator.load_remaining(self.config.max_pages).await?;
                let (_, state) = paginator.into_parts();

                log::info!(
                    "Listing complete: {} post(s) after {} load-more round(s)",
                    state.posts().len(),
                    rounds
                );
                Ok(SiteContent::Listing(state))
            }
        }
    }
}

impl PageComposer for PrismicToSite<'_> {
    fn compose(&self, content: &SiteContent) -> Result<RenderedPage, AppError> {
        match content {
            SiteContent::Listing(state) => compose_listing(state, self.config),
            SiteContent::Post(document) => compose_post(document, self.config),
        }
    }
}

impl PageDelivery for PrismicToSite<'_> {
    fn deliver(&self, content: &SiteContent, page: RenderedPage) -> Result<OutputReport, AppError> {
        let page_str = page.into_string();
        let mut plan = OutputPlan::new();

        if self.config.pipe {
            plan = plan.with_operation(DeliveryTarget::PrintToStdout { content: page_str });
        } else {
            let path = match content {
                SiteContent::Listing(_) => listing_output_path(&self.config.out_dir),
                SiteContent::Post(document) => {
                    post_output_path(&self.config.out_dir, &document.uid)
                }
            };
            plan = plan.with_operation(DeliveryTarget::WriteFile {
                path,
                content: page_str,
            });
        }

        let report = output::deliver(plan)?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }

        Ok(report)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = SiteConfig::resolve(cli)?;

    execute_pipeline(&config).await?;

    Ok(())
}

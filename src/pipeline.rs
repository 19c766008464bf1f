use std::path::PathBuf;
use log::{info, error};
use crate::config::ParserConfig;
use crate::detail;
use crate::error::{ExportError, ExtractError, FetchError};
use crate::exporter::XmlExporter;
use crate::fetcher::{HttpTransport, PageFetcher, Transport};
use crate::listing;

#[derive(Debug)]
pub enum RunOutcome {
    Exported(PathBuf),
    /// Listing page unavailable or without vacancies. Nothing written.
    NoVacancies,
    /// A detail page failed. Nothing written.
    DetailsAborted(ExtractError),
}

/// Runs listing, detail and export phases in order. Each phase gates the next.
pub struct Pipeline<T = HttpTransport> {
    fetcher: PageFetcher<T>,
    exporter: XmlExporter,
    listing_url: String,
    base_vacancy_url: String,
}

impl Pipeline<HttpTransport> {
    pub fn from_config(config: &ParserConfig) -> Result<Self, FetchError> {
        let fetcher = PageFetcher::from_config(config)?;
        Ok(Pipeline::new(fetcher, XmlExporter::from_config(config), config))
    }
}

impl<T: Transport> Pipeline<T> {
    pub fn new(fetcher: PageFetcher<T>, exporter: XmlExporter, config: &ParserConfig) -> Self {
        Pipeline {
            fetcher,
            exporter,
            listing_url: config.listing_url.clone(),
            base_vacancy_url: config.base_vacancy_url.clone(),
        }
    }

    /// Only filesystem failures during export are returned as errors.
    pub fn run(&self) -> Result<RunOutcome, ExportError> {
        let stubs = match self.fetcher.fetch(&self.listing_url) {
            Some(page) => {
                info!("Parsing vacancy list");
                listing::extract_listing(&page, &self.base_vacancy_url)
            }
            None => {
                error!("No page received. Revocation");
                Vec::new()
            }
        };

        if stubs.is_empty() {
            info!("No vacancies found");
            return Ok(RunOutcome::NoVacancies);
        }

        let records = match detail::extract_details(&self.fetcher, stubs) {
            Ok(records) => records,
            Err(e) => {
                error!("Detail extraction aborted: {}", e);
                return Ok(RunOutcome::DetailsAborted(e));
            }
        };

        let path = self.exporter.export(&records)?;
        Ok(RunOutcome::Exported(path))
    }
}

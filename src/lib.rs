pub mod config;
pub mod error;
pub mod models;
pub mod fetcher;
pub mod listing;
pub mod detail;
pub mod exporter;
pub mod pipeline;
pub mod logger;

// Exporting types for convenience
pub use config::ParserConfig;
pub use error::{ConfigError, ExportError, ExtractError, FetchError};
pub use models::{VacancyRecord, VacancyStub};
pub use fetcher::{HttpTransport, PageFetcher, Transport};
pub use exporter::XmlExporter;
pub use pipeline::{Pipeline, RunOutcome};

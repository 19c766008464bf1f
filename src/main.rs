use vacancy_feed::{logger, ParserConfig, Pipeline, RunOutcome};

use std::env;
use std::error::Error;
use std::path::PathBuf;
use log::{info, warn, error};

fn main() -> Result<(), Box<dyn Error>> {
    // Optional JSON config as first argument
    let config_path = env::args().nth(1).map(PathBuf::from);

    // The config names the log file, so it is read before the logger exists.
    let (config, config_error) = match config_path.as_deref() {
        Some(path) => ParserConfig::load_or_default(path),
        None => (ParserConfig::default(), None),
    };

    logger::init(&config.log_file)?;
    if let Some(e) = config_error {
        error!("Failed to load config {:?}: {}. Using defaults.", config_path, e);
    }

    info!("Starting vacancy feed export from {}", config.listing_url);

    let pipeline = Pipeline::from_config(&config)?;
    match pipeline.run()? {
        RunOutcome::Exported(path) => info!("Feed written to {:?}", path),
        RunOutcome::NoVacancies => warn!("No vacancies exported"),
        RunOutcome::DetailsAborted(e) => warn!("No vacancies exported: {}", e),
    }

    Ok(())
}

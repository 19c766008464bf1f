use log::LevelFilter;
use env_logger::{Builder, Logger, Target};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use chrono::Local;

/// Builds a logger appending to `log_file`.
/// The parent directory is created if it does not exist.
pub fn build(log_file: &Path) -> io::Result<Logger> {
    if let Some(dir) = log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let logger = Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} {:<12} {:<8} {}",
                Local::now().format("%d-%m-%y %H:%M"),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .filter(None, LevelFilter::Info)
        .build();

    Ok(logger)
}

/// Installs the process-wide logger. Fails if one is already installed.
pub fn init(log_file: &Path) -> io::Result<()> {
    let logger = build(log_file)?;
    let max_level = logger.filter();

    log::set_boxed_logger(Box::new(logger)).map_err(io::Error::other)?;
    log::set_max_level(max_level);

    log::info!("Logger initialized.");
    Ok(())
}

/// Logger setup for the terminal host
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Logger configuration.
///
/// The terminal is in raw mode on the alternate screen while the app runs,
/// so records are appended to `log_file` instead of stderr. With no file
/// they go to stderr, which only suits runs without the preview.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. "warn" or "iso3d_core=debug".
    /// Falls back to `RUST_LOG`, then to `warn`.
    pub env_filter: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            log_file: Some(std::env::temp_dir().join("iso3d-terminal.log")),
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build a logger for `config` without installing it.
pub fn configure(config: &LoggingConfig) -> io::Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = &config.env_filter {
        builder.parse_filters(filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }

    if let Some(path) = &config.log_file {
        let file = open_log_file(path)?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);
    }

    Ok(builder)
}

/// Install the global logger. A second call leaves the first logger in place.
pub fn init_logging(config: LoggingConfig) -> io::Result<()> {
    let mut builder = configure(&config)?;
    match builder.try_init() {
        Ok(()) => log::debug!("logging initialized"),
        Err(_) => log::debug!("logger already installed"),
    }
    Ok(())
}

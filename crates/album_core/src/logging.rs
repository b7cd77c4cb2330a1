//! Rotating file logs for album tooling.
//!
//! # Invariants
//! - At most one logger is started per process.
//! - Asking again for the active config succeeds; asking for any other
//!   level or directory fails with `LoggingError::AlreadyActive`.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, LogSpecification, Logger, LoggerHandle,
    Naming, WriteMode,
};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const LOG_FILE_BASENAME: &str = "album";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Must be absolute; created when missing.
    pub dir: PathBuf,
}

struct ActiveLogger {
    config: LogConfig,
    _handle: LoggerHandle,
}

#[derive(Debug)]
pub enum LoggingError {
    RelativeDir(PathBuf),
    CreateDir { dir: PathBuf, source: std::io::Error },
    Backend(FlexiLoggerError),
    AlreadyActive { active: LogConfig },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeDir(dir) => {
                write!(f, "log directory must be absolute, got `{}`", dir.display())
            }
            Self::CreateDir { dir, source } => {
                write!(f, "failed to create log directory `{}`: {source}", dir.display())
            }
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::AlreadyActive { active } => write!(
                f,
                "logging already active at `{}` with level {}",
                active.dir.display(),
                active.level
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            Self::RelativeDir(_) | Self::AlreadyActive { .. } => None,
        }
    }
}

impl From<FlexiLoggerError> for LoggingError {
    fn from(value: FlexiLoggerError) -> Self {
        Self::Backend(value)
    }
}

/// `Debug` in debug builds, `Info` otherwise.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Starts rotating file logs for `config`.
pub fn init_logging(config: LogConfig) -> Result<(), LoggingError> {
    if !config.dir.is_absolute() {
        return Err(LoggingError::RelativeDir(config.dir));
    }

    let active = ACTIVE.get_or_try_init(|| start_logger(config.clone()))?;
    if active.config != config {
        return Err(LoggingError::AlreadyActive {
            active: active.config.clone(),
        });
    }

    Ok(())
}

/// Returns the config of the running logger, if any.
pub fn active_config() -> Option<&'static LogConfig> {
    ACTIVE.get().map(|active| &active.config)
}

fn start_logger(config: LogConfig) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&config.dir).map_err(|source| LoggingError::CreateDir {
        dir: config.dir.clone(),
        source,
    })?;

    let spec = LogSpecification::builder().default(config.level).build();
    let handle = Logger::with(spec)
        .log_to_file(
            FileSpec::default()
                .directory(config.dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=logging_init module=logging status=ok version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        config.level,
        config.dir.display()
    );

    Ok(ActiveLogger {
        config,
        _handle: handle,
    })
}

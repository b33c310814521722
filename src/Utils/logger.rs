use chrono::Local;
use simplelog::*;
use std::fmt;
use std::fs::File;

#[derive(Debug)]
pub enum LoggerError {
    UnknownLevel(String),
    Io(std::io::Error),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoggerError::UnknownLevel(level) => write!(
                f,
                "loglevel must be debug, info, warn, error, off or none, got '{}'",
                level
            ),
            LoggerError::Io(err) => write!(f, "cannot create log file: {}", err),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::Io(err)
    }
}

/// level name to filter; `None` means Info
pub fn level_filter(loglevel: Option<&str>) -> Result<LevelFilter, LoggerError> {
    let Some(level) = loglevel else {
        return Ok(LevelFilter::Info);
    };
    match level.trim().to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" | "none" => Ok(LevelFilter::Off),
        _ => Err(LoggerError::UnknownLevel(level.to_string())),
    }
}

/// Terminal logger, plus a `log_<date>_<time>.txt` file when `log_to_file` is set.
///
/// A logger that is already installed is kept; the call then does nothing.
pub fn init_logger(loglevel: Option<&str>, log_to_file: bool) -> Result<(), LoggerError> {
    let log_option = level_filter(loglevel)?;
    if log_option == LevelFilter::Off {
        return Ok(());
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if log_to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        loggers.push(WriteLogger::new(log_option, Config::default(), File::create(name)?));
    }
    // a second initialisation fails with SetLoggerError, the first logger stays active
    let _ = CombinedLogger::init(loggers);
    Ok(())
}

use std::{fs::create_dir_all, io};

use thiserror::Error;
use tracing::{Level, subscriber::set_global_default};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{layer::SubscriberExt, registry};

/// Create and set the global loggers.
pub fn init_logger() -> Result<Vec<WorkerGuard>, LoggerError> {
    create_dir_all("./logs").map_err(LoggerError::CreateDirectory)?;

    let filter = tracing_subscriber::filter::Targets::new().with_default(Level::INFO);

    let appender = RollingFileAppender::builder()
        .filename_suffix("log")
        .rotation(Rotation::DAILY)
        .max_log_files(30)
        .build("./logs")?;
    let (file_writer, file_guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false);

    let (std_writer, std_guard) = tracing_appender::non_blocking(io::stdout());
    let std_layer = tracing_subscriber::fmt::layer()
        .with_writer(std_writer)
        .with_ansi(true)
        .with_target(false);

    let registry = registry().with(file_layer).with(std_layer).with(filter);

    set_global_default(registry).map_err(|_| LoggerError::AlreadySet)?;

    Ok(vec![file_guard, std_guard])
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to create rolling appender: {0}")]
    CreateRollingAppender(#[from] tracing_appender::rolling::InitError),

    #[error("Failed to create log directory: {0}")]
    CreateDirectory(#[source] io::Error),

    #[error("A global logger has already been set.")]
    AlreadySet,
}

use std::path::PathBuf;

use sizhu_base::BaseError;
use sizhu_calendar::CalendarError;
use sizhu_chart::BaziError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("cannot load reference data {}: {source}", path.display())]
    Data {
        path: PathBuf,
        source: CalendarError,
    },
    #[error("invalid argument: {0}")]
    Argument(String),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Chart(#[from] BaziError),
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

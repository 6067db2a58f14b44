use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while exporting a single dataset.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },

    #[error("invalid GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

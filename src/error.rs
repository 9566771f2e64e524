// Inventory retrieval errors

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can abort a report cycle. None of these are retried.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("failed to reach {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("authentication rejected by {url} ({status})")]
    Auth { url: String, status: StatusCode },

    #[error("{path} returned {status}: {body}")]
    Api {
        path: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode response of {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read inventory snapshot {path}: {source}")]
    SnapshotIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse inventory snapshot {path}: {source}")]
    SnapshotParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("inventory retrieval did not finish within {0:?}")]
    Timeout(Duration),
}

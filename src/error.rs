use std::path::PathBuf;

use thiserror::Error;

/// Problems that disqualify a single record or stop pair. These are never
/// surfaced to the caller, the offending item is dropped and processing goes on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Stop time for stop {stop_id:?} has no trip id")]
    MissingTripId { stop_id: String },

    #[error("Invalid stop sequence {value:?} on Trip {trip_id:?}")]
    InvalidStopSequence { trip_id: String, value: String },

    #[error("Invalid time {0:?}")]
    InvalidTime(String),

    #[error("Non positive travel time ({minutes} min) from {origin:?} to {destination:?}")]
    NonPositiveTravelTime {
        origin: String,
        destination: String,
        minutes: i64,
    },
}

/// Errors that abort the whole run before anything is written.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not read CSV file {path:?}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Statistics document {path:?} is not a JSON object")]
    StatisticsNotAnObject { path: PathBuf },
}

use std::{fs, io, path::Path};

use log::info;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;

pub const TRAVEL_TIMES_KEY: &str = "all_travel_times";
pub const TRAVEL_TIME_COUNT_KEY: &str = "travel_time_count";

/// Stores `entries` in the statistics document at `path`, keeping every other
/// key of the document. A missing document is created.
pub fn update_statistics<T: Serialize>(path: &Path, entries: &[T]) -> Result<(), Error> {
    let mut statistics = read_statistics(path)?;

    statistics.insert(
        TRAVEL_TIMES_KEY.to_owned(),
        serde_json::to_value(entries).map_err(|source| Error::Json {
            path: path.to_owned(),
            source,
        })?,
    );
    statistics.insert(TRAVEL_TIME_COUNT_KEY.to_owned(), Value::from(entries.len()));

    let json = serde_json::to_string_pretty(&statistics).map_err(|source| Error::Json {
        path: path.to_owned(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    info!("Updated statistics with {} station pairs", entries.len());
    info!("Saved to: {:?}", path);

    Ok(())
}

pub fn read_statistics(path: &Path) -> Result<Map<String, Value>, Error> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("No statistics at {:?}, starting a new document", path);
            return Ok(Map::new());
        }
        Err(source) => {
            return Err(Error::Io {
                path: path.to_owned(),
                source,
            })
        }
    };

    match serde_json::from_str(&contents) {
        Ok(Value::Object(statistics)) => Ok(statistics),
        Ok(_) => Err(Error::StatisticsNotAnObject {
            path: path.to_owned(),
        }),
        Err(source) => Err(Error::Json {
            path: path.to_owned(),
            source,
        }),
    }
}

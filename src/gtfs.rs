use std::path::{Path, PathBuf};

use log::info;
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::Error;

pub const STOPS_FILE: &str = "stops.txt";
pub const STOP_TIMES_FILE: &str = "stop_times.txt";

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Stop {
    pub stop_id: Option<String>,
    pub stop_name: Option<String>,
}

/// One row of `stop_times.txt`, kept as loose strings. Validation happens when
/// the row is turned into a [`crate::data::StopTimeRecord`].
#[derive(Deserialize, Debug, Default, Clone)]
pub struct StopTime {
    pub trip_id: Option<String>,
    pub stop_id: Option<String>,
    pub stop_sequence: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
}

#[derive(Debug, Default)]
pub struct Feed {
    pub stops: Vec<Stop>,
    pub stop_times: Vec<StopTime>,
}

impl Feed {
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let dir = dir.as_ref();

        info!("Processing stops");
        let stops = deserialize_into::<Stop>(dir.join(STOPS_FILE))?;

        info!("Processing stop_times");
        let stop_times = deserialize_into::<StopTime>(dir.join(STOP_TIMES_FILE))?;

        info!(
            "Loaded {} stops and {} stop times from {:?}",
            stops.len(),
            stop_times.len(),
            dir
        );

        Ok(Self { stops, stop_times })
    }
}

pub fn deserialize_into<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>, Error> {
    let csv_error = |source: csv::Error| Error::Csv {
        path: path.clone(),
        source,
    };

    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_path(&path)
        .map_err(csv_error)?
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(csv_error)
}

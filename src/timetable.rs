use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use log::{debug, info, trace};

use crate::data::*;
use crate::gtfs;

pub type Trips = BTreeMap<String, TripStopSequence>;

/// Stop names and reconstructed trips, ready for aggregation.
#[derive(Debug, Default)]
pub struct Timetable {
    pub stop_names: HashMap<String, String>,
    pub trips: Trips,
}

impl Timetable {
    /// Display name of a stop, falling back to its id when the stop is unknown.
    pub fn stop_name<'a>(&'a self, stop_id: &'a str) -> &'a str {
        stop_name(&self.stop_names, stop_id)
    }
}

impl From<gtfs::Feed> for Timetable {
    fn from(feed: gtfs::Feed) -> Self {
        let stop_names = stop_names(feed.stops);

        let total = feed.stop_times.len();
        let records = feed
            .stop_times
            .into_iter()
            .filter_map(|row| {
                StopTimeRecord::try_from(row)
                    .map_err(|err| trace!("Skipping stop time: {}", err))
                    .ok()
            })
            .collect::<Vec<_>>();

        if records.len() < total {
            debug!(
                "Skipped {} of {} stop times that could not be attributed to a trip",
                total - records.len(),
                total
            );
        }

        let trips = reconstruct_trips(records);
        info!("Reconstructed {} trips", trips.len());

        Self { stop_names, trips }
    }
}

pub fn stop_name<'a>(stop_names: &'a HashMap<String, String>, stop_id: &'a str) -> &'a str {
    stop_names
        .get(stop_id)
        .map(String::as_str)
        .unwrap_or(stop_id)
}

pub fn stop_names(stops: Vec<gtfs::Stop>) -> HashMap<String, String> {
    stops
        .into_iter()
        .filter_map(|stop| match (stop.stop_id, stop.stop_name) {
            (Some(id), Some(name)) if !id.is_empty() => Some((id, name)),
            _ => None,
        })
        .collect()
}

/// Groups stop times by trip, each trip ordered by stop sequence.
pub fn reconstruct_trips<I>(records: I) -> Trips
where
    I: IntoIterator<Item = StopTimeRecord>,
{
    records
        .into_iter()
        .filter(|record| !record.trip_id.is_empty())
        .into_group_map_by(|record| record.trip_id.clone())
        .into_iter()
        .map(|(trip_id, records)| {
            let visits = records.into_iter().map(StopVisit::from).collect();
            (trip_id.clone(), TripStopSequence::new(trip_id, visits))
        })
        .collect()
}

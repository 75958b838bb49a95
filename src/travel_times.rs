use std::collections::{btree_map::Entry, BTreeMap, HashMap};

use itertools::Itertools;
use log::{debug, info, trace};

use crate::data::*;
use crate::error::RecordError;
use crate::timetable::{stop_name, Timetable};

/// Fastest observed travel time per (origin name, destination name).
///
/// Every way of adding to the matrix goes through [`TravelTimeMatrix::observe`],
/// which keeps the strictly smallest travel time and, on ties, the entry that was
/// there first. Merging partial matrices with the same rule gives the same travel
/// times regardless of how the trips were split up.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TravelTimeMatrix(pub BTreeMap<OdPair, TravelTimeEntry>);

impl TravelTimeMatrix {
    /// Folds every trip into one matrix, trips taken in ascending trip id order.
    pub fn aggregate(timetable: &Timetable) -> Self {
        let mut matrix = Self::default();
        let mut skipped = 0;

        for trip in timetable.trips.values() {
            skipped += matrix.observe_trip(trip, &timetable.stop_names);
        }

        if skipped > 0 {
            debug!("Skipped {} stop pairs with unusable times", skipped);
        }
        info!("Generated {} unique station pairs", matrix.len());

        matrix
    }

    pub fn from_trip(trip: &TripStopSequence, stop_names: &HashMap<String, String>) -> Self {
        let mut matrix = Self::default();
        matrix.observe_trip(trip, stop_names);
        matrix
    }

    /// Observes every forward pair of stops of `trip`. Returns the number of
    /// pairs that were skipped.
    pub fn observe_trip(
        &mut self,
        trip: &TripStopSequence,
        stop_names: &HashMap<String, String>,
    ) -> usize {
        let mut skipped = 0;

        for ((i, origin), (j, destination)) in trip.visits.iter().enumerate().tuple_combinations()
        {
            match travel_time(origin, destination) {
                Ok(minutes) => {
                    self.observe(TravelTimeEntry {
                        origin: stop_name(stop_names, &origin.stop_id).to_owned(),
                        destination: stop_name(stop_names, &destination.stop_id).to_owned(),
                        travel_time_minutes: minutes,
                        num_stops: j - i,
                    });
                }
                Err(err) => {
                    trace!("Skipping pair {}..{} on Trip {:?}: {}", i, j, trip.trip_id, err);
                    skipped += 1;
                }
            }
        }

        skipped
    }

    /// Stores `entry` if its pair is new or it beats the stored travel time.
    /// Returns whether the matrix changed.
    pub fn observe(&mut self, entry: TravelTimeEntry) -> bool {
        match self.0.entry(entry.key()) {
            Entry::Vacant(vacant) => {
                vacant.insert(entry);
                true
            }
            Entry::Occupied(mut occupied) => {
                if entry.travel_time_minutes < occupied.get().travel_time_minutes {
                    occupied.insert(entry);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn merge(&mut self, other: TravelTimeMatrix) {
        for entry in other.0.into_values() {
            self.observe(entry);
        }
    }

    pub fn get(&self, origin: &str, destination: &str) -> Option<&TravelTimeEntry> {
        self.0.get(&OdPair {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `n` slowest pairs, slowest first.
    pub fn longest(&self, n: usize) -> Vec<&TravelTimeEntry> {
        self.0
            .values()
            .sorted_by(|a, b| b.travel_time_minutes.cmp(&a.travel_time_minutes))
            .take(n)
            .collect()
    }

    pub fn entries(&self) -> Vec<&TravelTimeEntry> {
        self.0.values().collect()
    }

    pub fn into_entries(self) -> Vec<TravelTimeEntry> {
        self.0.into_values().collect()
    }
}

pub fn travel_time(origin: &StopVisit, destination: &StopVisit) -> Result<Minutes, RecordError> {
    let departure = origin.departure()?;
    let arrival = destination.arrival()?;

    let minutes = i64::from(arrival) - i64::from(departure);
    if minutes <= 0 {
        return Err(RecordError::NonPositiveTravelTime {
            origin: origin.stop_id.clone(),
            destination: destination.stop_id.clone(),
            minutes,
        });
    }

    Ok(arrival - departure)
}

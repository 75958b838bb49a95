use serde::{Deserialize, Serialize};

use crate::{error::RecordError, gtfs};

/// Minutes since midnight of the service day. Values past 24:00 belong to the
/// same service day, so they keep growing instead of wrapping.
pub type Minutes = u32;

pub type StopSequence = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTimeRecord {
    pub trip_id: String,
    pub stop_id: String,
    pub stop_sequence: StopSequence,
    pub arrival_time: String,
    pub departure_time: String,
}

impl TryFrom<gtfs::StopTime> for StopTimeRecord {
    type Error = RecordError;

    fn try_from(row: gtfs::StopTime) -> Result<Self, Self::Error> {
        let stop_id = row.stop_id.unwrap_or_default();

        let trip_id = match row.trip_id {
            Some(trip_id) if !trip_id.is_empty() => trip_id,
            _ => return Err(RecordError::MissingTripId { stop_id }),
        };

        let raw_sequence = row.stop_sequence.unwrap_or_default();
        let stop_sequence = raw_sequence.trim().parse::<StopSequence>().map_err(|_| {
            RecordError::InvalidStopSequence {
                trip_id: trip_id.clone(),
                value: raw_sequence.clone(),
            }
        })?;

        Ok(Self {
            trip_id,
            stop_id,
            stop_sequence,
            arrival_time: row.arrival_time.unwrap_or_default(),
            departure_time: row.departure_time.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopVisit {
    pub stop_id: String,
    pub stop_sequence: StopSequence,
    pub arrival_time: String,
    pub departure_time: String,
}

impl From<StopTimeRecord> for StopVisit {
    fn from(record: StopTimeRecord) -> Self {
        Self {
            stop_id: record.stop_id,
            stop_sequence: record.stop_sequence,
            arrival_time: record.arrival_time,
            departure_time: record.departure_time,
        }
    }
}

impl StopVisit {
    pub fn arrival(&self) -> Result<Minutes, RecordError> {
        parse_service_minutes(&self.arrival_time)
    }

    pub fn departure(&self) -> Result<Minutes, RecordError> {
        parse_service_minutes(&self.departure_time)
    }
}

/// The stops of one trip, ascending by stop sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripStopSequence {
    pub trip_id: String,
    pub visits: Vec<StopVisit>,
}

impl TripStopSequence {
    /// Sorts with a stable sort, so visits sharing a sequence number keep the
    /// order in which they were given.
    pub fn new(trip_id: String, mut visits: Vec<StopVisit>) -> Self {
        visits.sort_by_key(|visit| visit.stop_sequence);
        Self { trip_id, visits }
    }
}

#[cfg(test)]
impl TripStopSequence {
    pub fn stop_ids(&self) -> Vec<&str> {
        self.visits
            .iter()
            .map(|visit| visit.stop_id.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OdPair {
    pub origin: String,
    pub destination: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TravelTimeEntry {
    pub origin: String,
    pub destination: String,
    pub travel_time_minutes: Minutes,
    pub num_stops: usize,
}

impl TravelTimeEntry {
    pub fn key(&self) -> OdPair {
        OdPair {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
        }
    }
}

/// Parses `HH:MM:SS` or `HH:MM` into whole minutes since the start of the
/// service day. Hours may exceed 23. Seconds must be numeric but are dropped.
pub fn parse_service_minutes(time: &str) -> Result<Minutes, RecordError> {
    let invalid = || RecordError::InvalidTime(time.to_owned());

    let parts: Vec<&str> = time.trim().split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(invalid());
    }

    let mut fields = parts.iter().map(|part| part.parse::<Minutes>());
    let hours = fields.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
    let minutes = fields.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
    if let Some(seconds) = fields.next() {
        seconds.map_err(|_| invalid())?;
    }

    hours
        .checked_mul(60)
        .and_then(|hours| hours.checked_add(minutes))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(trip_id: Option<&str>, stop_sequence: Option<&str>) -> gtfs::StopTime {
        gtfs::StopTime {
            trip_id: trip_id.map(str::to_owned),
            stop_id: Some("S1".to_owned()),
            stop_sequence: stop_sequence.map(str::to_owned),
            arrival_time: Some("08:00:00".to_owned()),
            departure_time: None,
        }
    }

    #[test]
    fn converts_valid_row() {
        let record = StopTimeRecord::try_from(row(Some("T1"), Some(" 7 "))).unwrap();

        assert_eq!(record.trip_id, "T1");
        assert_eq!(record.stop_sequence, 7);
        assert_eq!(record.arrival_time, "08:00:00");
        assert_eq!(record.departure_time, "");
    }

    #[test]
    fn rejects_missing_trip_id() {
        for trip_id in [None, Some("")] {
            assert_eq!(
                StopTimeRecord::try_from(row(trip_id, Some("1"))),
                Err(RecordError::MissingTripId {
                    stop_id: "S1".to_owned()
                })
            );
        }
    }

    #[test]
    fn rejects_bad_stop_sequence() {
        for sequence in [None, Some(""), Some("two"), Some("-1"), Some("1.5")] {
            assert!(matches!(
                StopTimeRecord::try_from(row(Some("T1"), sequence)),
                Err(RecordError::InvalidStopSequence { .. })
            ));
        }
    }

    #[test]
    fn sorts_visits_stably_by_sequence() {
        let visit = |stop_id: &str, stop_sequence| StopVisit {
            stop_id: stop_id.to_owned(),
            stop_sequence,
            arrival_time: String::new(),
            departure_time: String::new(),
        };

        let trip = TripStopSequence::new(
            "T1".to_owned(),
            vec![
                visit("C", 30),
                visit("A", 10),
                visit("B1", 20),
                visit("B2", 20),
            ],
        );

        assert_eq!(trip.stop_ids(), vec!["A", "B1", "B2", "C"]);
    }

    #[test]
    fn parses_service_times() {
        assert_eq!(parse_service_minutes("08:00:00"), Ok(480));
        assert_eq!(parse_service_minutes("8:05"), Ok(485));
        assert_eq!(parse_service_minutes("08:10:59"), Ok(490));
        assert_eq!(parse_service_minutes("24:10:00"), Ok(1450));
        assert_eq!(parse_service_minutes(" 23:50:00 "), Ok(1430));
    }

    #[test]
    fn rejects_malformed_times() {
        for time in ["", "--:--", "0800", "08:xx", "08:00:zz", "1:2:3:4", "-1:00"] {
            assert_eq!(
                parse_service_minutes(time),
                Err(RecordError::InvalidTime(time.to_owned())),
                "{time:?} should not parse"
            );
        }
    }
}

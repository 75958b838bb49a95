pub mod config;
pub mod data;
pub mod error;
pub mod gtfs;
pub mod statistics;
pub mod timetable;
pub mod travel_times;

pub use data::{TravelTimeEntry, TripStopSequence};
pub use error::Error;
pub use timetable::Timetable;
pub use travel_times::TravelTimeMatrix;

/// Loads the feed in `config.gtfs_dir`, computes the travel time matrix and
/// writes it into the statistics document. Nothing is written if loading fails.
pub fn run(config: &config::Config) -> Result<TravelTimeMatrix, Error> {
    let feed = gtfs::Feed::from_dir(&config.gtfs_dir)?;

    let timetable = Timetable::from(feed);
    let matrix = TravelTimeMatrix::aggregate(&timetable);

    statistics::update_statistics(&config.statistics, &matrix.entries())?;

    Ok(matrix)
}

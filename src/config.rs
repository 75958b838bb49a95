use std::path::PathBuf;

use structopt::StructOpt;

pub const DEFAULT_GTFS_DIR: &str = "GTFS/CMRL";
pub const DEFAULT_STATISTICS_PATH: &str = "client/public/data/network_statistics.json";
pub const DEFAULT_SAMPLES: &str = "5";

#[derive(StructOpt, Debug)]
#[structopt(
    name = "transit-matrix",
    about = "Fastest observed travel time between every pair of stations sharing a trip"
)]
pub struct Config {
    /// directory holding `stops.txt` and `stop_times.txt`
    #[structopt(long, parse(from_os_str), default_value = DEFAULT_GTFS_DIR)]
    pub gtfs_dir: PathBuf,

    /// statistics document receiving the travel times
    #[structopt(long, parse(from_os_str), default_value = DEFAULT_STATISTICS_PATH)]
    pub statistics: PathBuf,

    /// number of longest journeys to log after the run
    #[structopt(long, default_value = DEFAULT_SAMPLES)]
    pub samples: usize,
}

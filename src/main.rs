use env_logger::Env;
use log::info;
use structopt::StructOpt;

use transit_matrix::config::Config;

fn main() -> Result<(), transit_matrix::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_args();
    info!("Building travel time matrix from {:?}", config.gtfs_dir);

    let matrix = transit_matrix::run(&config)?;

    if config.samples > 0 {
        info!("Sample long-distance journeys:");
        for journey in matrix.longest(config.samples) {
            info!(
                "  {} -> {}: {} min ({} stops)",
                journey.origin, journey.destination, journey.travel_time_minutes, journey.num_stops
            );
        }
    }

    Ok(())
}

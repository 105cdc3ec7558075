//! Where is the sun right now, or at a given local time, for a given city?
//!
//! Usage: sun_position [-d "YYYY-MM-DD HH:MM:SS"] [-c CITY] [-p] [-o PATH] [-v | -q]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{error, info};

use sun_position::geo::{self, Gazetteer, Geocoder};
use sun_position::plot::{self, Scene};
use sun_position::{logging, time, SkyPath, SkyPathConfig};

#[derive(Parser)]
#[command(name = "sun_position", about = "Sun bearing and elevation for a place and local time")]
struct Cli {
    /// Local time at the place, "YYYY-MM-DD HH:MM:SS" (default: now)
    #[arg(short = 'd', long = "date-time")]
    date_time: Option<String>,

    /// Place name or "lat,lon" (default: San Francisco, CA)
    #[arg(short, long)]
    city: Option<String>,

    /// Write the sky chart to --output instead of printing the path
    #[arg(short = 'p', long)]
    save_plot: bool,

    /// Sky chart path
    #[arg(short, long, default_value = plot::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Minutes between sky path samples
    #[arg(long, default_value_t = SkyPathConfig::default().interval_minutes)]
    interval: u32,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn run(cli: Cli) -> sun_position::Result<()> {
    let gazetteer = Gazetteer::default();

    let place = match &cli.city {
        None => {
            let place = geo::default_place();
            info!(
                "Using default location: {} (lat {}, lon {})",
                place.name,
                place.position.latitude(),
                place.position.longitude()
            );
            place
        }
        Some(city) => {
            let place = gazetteer.resolve(city)?;
            info!(
                "Using city input: {} (lat {}, lon {})",
                place.name,
                place.position.latitude(),
                place.position.longitude()
            );
            place
        }
    };

    let zone = geo::zone_of(&place, &gazetteer);
    info!("Using timezone: {}", zone.name());

    let local = match &cli.date_time {
        None => {
            let now = time::now_in(&zone);
            info!("Using default time (current time at location): {}", now);
            now
        }
        Some(input) => {
            let local = time::parse_local(input, &zone)?;
            info!("Using time input: {}", local);
            local
        }
    };

    let sun = sun_position::sun_position(place.position, &local);
    println!("Bearing from north = {}", sun.bearing_degrees());
    println!("Elevation from horizon = {}", sun.elevation_degrees());

    let path = SkyPath::new(
        &local,
        place.position,
        SkyPathConfig {
            interval_minutes: cli.interval,
        },
    )?;
    let scene = Scene::new(sun, path.samples().collect(), &local, &place.name);
    println!("{}", scene.caption());

    if cli.save_plot {
        plot::save(&scene, &cli.output)?;
    } else {
        print!("{}", plot::path_table(&scene.path));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use fleetroute_optimizer::{
    json::types::{JsonOptimizationRequest, JsonTour},
    problem::{kilometers::Kilometers, kmh::Kmh, location::Location},
    solver::{
        optimizer::{OptimizerParams, RouteOptimizer},
        strategy::Strategy,
        tour::Tour,
    },
};
use jiff::Timestamp;
use tracing::{info, warn};

use crate::parsers;

pub const AVERAGE_SPEED_ENV_VAR: &str = "FLEETROUTE_AVERAGE_SPEED_KMH";

#[derive(Args)]
pub struct OptimizeArgs {
    /// JSON request file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Overrides the algorithm of the request (nearest-neighbor, 2-opt, hybrid)
    #[arg(short, long, value_parser = parsers::parse_strategy)]
    algorithm: Option<Strategy>,

    /// Drop stops whose latest delivery has passed at this instant ("now" or RFC 3339)
    #[arg(long, value_parser = parsers::parse_timestamp)]
    now: Option<Timestamp>,

    /// Average speed in km/h used for the travel time estimate
    #[arg(long, value_parser = parsers::parse_speed)]
    average_speed: Option<Kmh>,

    /// Truck the route is planned for
    #[arg(long)]
    truck_id: Option<u64>,

    /// Where to write the JSON tour, stdout when absent
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let content: JsonOptimizationRequest = serde_json::from_reader(BufReader::new(f))?;
    let mut request = content.build_request()?;

    if args.algorithm.is_some() {
        request.strategy = args.algorithm;
    }
    if args.now.is_some() {
        request.now = args.now;
    }
    if args.truck_id.is_some() {
        request.truck_id = args.truck_id;
    }

    let optimizer = RouteOptimizer::new(OptimizerParams {
        average_speed: average_speed(args.average_speed),
        ..OptimizerParams::default()
    });
    let strategy = request.strategy.unwrap_or(optimizer.params().strategy);

    info!(
        "Optimizing {} stops with {} from {:?}",
        request.stops.len(),
        strategy,
        args.input
    );

    let tour = optimizer.solve(&request)?;
    let dropped = request.stops.len() - tour.len();
    if dropped > 0 {
        warn!("{} stops were past their delivery deadline", dropped);
    }

    info!(
        "Finished: stops = {}, distance = {:.2} km, service time = {} min, efficiency = {:.1}",
        tour.len(),
        tour.total_distance().value(),
        tour.total_time().as_mins(),
        tour.efficiency(),
    );

    println!("{}", tour_table(&request.depot, &tour));

    let response = JsonTour::from_tour(
        &tour,
        strategy,
        optimizer.params().average_speed,
        request.truck_id,
    )?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, serde_json::to_string_pretty(&response)?)?;
            info!("Tour written to {:?}", out);
        }
        None => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

fn average_speed(flag: Option<Kmh>) -> Kmh {
    if let Some(speed) = flag {
        return speed;
    }

    match std::env::var(AVERAGE_SPEED_ENV_VAR) {
        Ok(value) => match parsers::parse_speed(&value) {
            Ok(speed) => speed,
            Err(error) => {
                warn!("Ignoring {}: {}", AVERAGE_SPEED_ENV_VAR, error);
                Kmh::default()
            }
        },
        Err(_) => Kmh::default(),
    }
}

fn tour_table(depot: &Location, tour: &Tour) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#",
        "Stop",
        "Priority",
        "Latitude",
        "Longitude",
        "Leg (km)",
        "Service (min)",
    ]);

    let mut previous = depot;
    let mut travelled = Kilometers::ZERO;

    for (position, stop) in tour.stops().iter().enumerate() {
        let leg = previous.haversine_distance(stop.location());
        travelled += leg;
        previous = stop.location();

        table.add_row(vec![
            (position + 1).to_string(),
            stop.id().to_string(),
            stop.priority().to_string(),
            format!("{:.5}", stop.location().lat()),
            format!("{:.5}", stop.location().lon()),
            format!("{:.2}", leg.value()),
            stop.service_duration().as_mins().to_string(),
        ]);
    }

    table.add_row(vec![
        String::new(),
        String::from("total"),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", travelled.value()),
        tour.total_time().as_mins().to_string(),
    ]);

    table
}

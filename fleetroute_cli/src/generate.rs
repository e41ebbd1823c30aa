use std::path::PathBuf;

use clap::Subcommand;
use fleetroute_optimizer::json::types::{JsonCoordinate, JsonOptimizationRequest, JsonStop};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

const PRIORITIES: [&str; 4] = ["low", "medium", "high", "urgent"];

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output file of the request schema
        #[arg(long, short = 'o')]
        out: PathBuf,

        /// Write the response schema instead
        #[arg(long)]
        response: bool,
    },
    /// Random request around a depot, for experimenting with the algorithms
    Stops {
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 18.4861, allow_hyphen_values = true)]
        latitude: f64,

        #[arg(long, default_value_t = -69.9312, allow_hyphen_values = true)]
        longitude: f64,

        /// Maximum offset from the depot, in degrees
        #[arg(long, default_value_t = 0.1)]
        spread: f64,

        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out, response } => {
            let schema = if response {
                fleetroute_optimizer::json::schema::generate_response_json_schema()?
            } else {
                fleetroute_optimizer::json::schema::generate_json_schema()?
            };

            write(&out, schema)?;
        }
        GenerateSubcommands::Stops {
            count,
            seed,
            latitude,
            longitude,
            spread,
            out,
        } => {
            let depot = JsonCoordinate {
                latitude,
                longitude,
            };
            let request = random_request(count, seed, depot, spread);
            write(&out, serde_json::to_string_pretty(&request)?)?;
            info!("Generated {} stops into {:?}", count, out);
        }
    }

    Ok(())
}

fn write(out: &PathBuf, content: String) -> Result<(), anyhow::Error> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, content)?;
    Ok(())
}

fn random_request(
    count: usize,
    seed: u64,
    depot: JsonCoordinate,
    spread: f64,
) -> JsonOptimizationRequest {
    let mut rng = StdRng::seed_from_u64(seed);
    let spread = spread.abs().max(f64::EPSILON);

    let stops = (1..=count as u64)
        .map(|id| JsonStop {
            id,
            latitude: (depot.latitude + rng.random_range(-spread..spread)).clamp(-90.0, 90.0),
            longitude: (depot.longitude + rng.random_range(-spread..spread)).clamp(-180.0, 180.0),
            priority: PRIORITIES[rng.random_range(0..PRIORITIES.len())].to_string(),
            estimated_time: Some(rng.random_range(5..=45)),
            earliest_delivery: None,
            latest_delivery: None,
        })
        .collect();

    JsonOptimizationRequest {
        truck_id: None,
        depot,
        stops,
        algorithm: None,
        now: None,
    }
}

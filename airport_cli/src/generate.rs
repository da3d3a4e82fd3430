use std::path::{Path, PathBuf};

use airport_reducer::{
    json::types::JsonAirportNetwork, network::random_network::random_connected_network,
};
use clap::Subcommand;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output file for the network JSON schema
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    /// Random connected network, written as JSON
    Network {
        #[arg(short, long)]
        airports: usize,

        /// Connections added on top of the random spanning tree
        #[arg(short, long, default_value_t = 0)]
        extra_connections: usize,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = airport_reducer::json::schema::generate_json_schema()?;
            write_file(&out, schema)?;
        }
        GenerateSubcommands::Network {
            airports,
            extra_connections,
            seed,
            out,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let network = random_connected_network(&mut rng, airports, extra_connections)?;
            info!(
                airports = network.num_airports(),
                connections = network.num_connections(),
                "Generated network"
            );

            let json = serde_json::to_string_pretty(&JsonAirportNetwork::from(&network))?;
            write_file(&out, json)?;
        }
    }

    Ok(())
}

fn write_file(out: &Path, content: String) -> Result<(), std::io::Error> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, content)
}

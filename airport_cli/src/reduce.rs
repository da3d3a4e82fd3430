use std::path::{Path, PathBuf};

use airport_reducer::{
    json::types::{FromNetwork, JsonSpanningTree},
    mst::{
        mst_params::{FrontierStrategy, MstParams},
        prim::MstBuilder,
    },
    network::airport_network::AirportNetwork,
    parsers::{edge_list::EdgeListParser, json::JsonNetworkParser, parser::NetworkParser},
};
use clap::{Args, ValueEnum};
use comfy_table::Table;
use tracing::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FrontierArg {
    Scan,
    BinaryHeap,
}

impl From<FrontierArg> for FrontierStrategy {
    fn from(value: FrontierArg) -> Self {
        match value {
            FrontierArg::Scan => FrontierStrategy::Scan,
            FrontierArg::BinaryHeap => FrontierStrategy::BinaryHeap,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args)]
pub struct ReduceArgs {
    /// Network file, JSON (`.json`) or a `FROM TO COST` connection list
    #[arg(short, long)]
    input: PathBuf,

    /// Overrides the frontier strategy of the network file
    #[arg(short, long, value_enum)]
    frontier: Option<FrontierArg>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Writes the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: ReduceArgs) -> Result<(), anyhow::Error> {
    info!("Reducing network {:?}", args.input);
    let (network, file_params) = load_network(&args.input)?;

    let params = match args.frontier {
        Some(frontier) => MstParams {
            frontier: frontier.into(),
        },
        None => file_params.unwrap_or_default(),
    };

    let airports = network.airport_indices().collect::<Vec<_>>();
    let builder = MstBuilder::new(&network).with_params(params);
    let tree = builder.minimal_spanning_tree(&airports)?;

    info!(
        frontier = %builder.params().frontier,
        airports = network.num_airports(),
        connections = tree.len(),
        total_cost = tree.total_cost(),
        "Spanning tree found"
    );

    let json = JsonSpanningTree::from_network(&tree, &network);
    let rendered = match args.format {
        OutputFormat::Table => render_table(&json),
        OutputFormat::Json => serde_json::to_string_pretty(&json)?,
    };

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(path, rendered)?;
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn load_network(path: &Path) -> Result<(AirportNetwork, Option<MstParams>), anyhow::Error> {
    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    if is_json {
        let json = JsonNetworkParser.read(path)?;
        let network = json.build_network()?;
        Ok((network, json.params))
    } else {
        Ok((EdgeListParser.parse(path)?, None))
    }
}

fn render_table(tree: &JsonSpanningTree) -> String {
    let mut table = Table::new();
    table.set_header(vec!["From", "To", "Cost"]);

    for connection in &tree.connections {
        table.add_row(vec![
            connection.from.clone(),
            connection.to.clone(),
            format!("{:.2}", connection.cost.unwrap_or_default()),
        ]);
    }

    table.add_row(vec![
        String::from("Total"),
        String::new(),
        format!("{:.2}", tree.total_cost),
    ]);

    table.to_string()
}

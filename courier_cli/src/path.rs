use std::path::PathBuf;

use clap::Args;
use courier_routing::{graph_builder::GraphBuilder, shortest_path::ShortestPathEngine};
use tracing::info;

use crate::loader;

#[derive(Args)]
pub struct PathArgs {
    /// CSV file with a header line followed by name,latitude,longitude rows
    #[arg(short, long)]
    cities: PathBuf,

    #[arg(long)]
    from: String,

    #[arg(long)]
    to: String,
}

pub fn run(args: PathArgs) -> anyhow::Result<()> {
    let cities = loader::read_cities_file(&args.cities)?;
    let graph = GraphBuilder::new(cities).build()?;

    let route = ShortestPathEngine::new(&graph).shortest_path(&args.from, &args.to)?;
    info!(stops = route.len(), "Found shortest path");

    println!("{}", route.names(&graph).join(" -> "));
    println!("Distance: {}", route.distance());

    Ok(())
}

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use courier_optimizer::{
    balancer::TieBreak,
    planner::{DEFAULT_VEHICLE_SPEED_KMH, DeliveryRequest, PlanningParams, plan_deliveries},
    problem::order::Order,
    report::DeliveryReport,
};
use courier_routing::{graph_builder::GraphBuilder, kmh::Kmh};

use crate::{loader, parsers};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct PlanArgs {
    /// CSV file with a header line followed by name,latitude,longitude rows
    #[arg(short, long)]
    cities: PathBuf,

    /// City every vehicle starts from
    #[arg(long)]
    depot: String,

    /// Capacity of each vehicle, e.g. 8,8
    #[arg(long, value_delimiter = ',', required = true)]
    capacities: Vec<f64>,

    /// Number of vehicles (default: one per capacity)
    #[arg(long)]
    vehicles: Option<usize>,

    /// Optional label for each vehicle, e.g. truck,van
    #[arg(long = "types", value_delimiter = ',')]
    vehicle_types: Vec<String>,

    /// Orders as destination:weight, e.g. Mumbai:4,Pune:2
    #[arg(short, long, value_delimiter = ',', value_parser = parsers::parse_order, required = true)]
    orders: Vec<Order>,

    /// Constant vehicle speed in km/h
    #[arg(long, default_value_t = DEFAULT_VEHICLE_SPEED_KMH)]
    speed: f64,

    /// How to choose between equally loaded vehicles (lowest-index or proximity)
    #[arg(long, value_parser = parsers::parse_tie_break, default_value = "lowest-index")]
    tie_break: TieBreak,

    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let cities = loader::read_cities_file(&args.cities)?;
    let graph = GraphBuilder::new(cities).build()?;

    let request = DeliveryRequest {
        depot: args.depot,
        orders: args.orders,
        vehicle_count: args.vehicles.unwrap_or(args.capacities.len()),
        capacities: args.capacities,
        vehicle_types: args.vehicle_types,
    };
    let params = PlanningParams {
        speed: Kmh::new(args.speed),
        tie_break: args.tie_break,
    };

    let plan = plan_deliveries(&graph, &request, &params)?;
    let report = DeliveryReport::new(&graph, &plan)?;

    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

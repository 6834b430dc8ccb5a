use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{path::PathArgs, plan::PlanArgs};

mod loader;
mod parsers;
mod path;
mod plan;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance orders over the fleet and route every vehicle from the depot
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    /// Shortest path between two cities
    Path {
        #[command(flatten)]
        args: PathArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Plan { args } => plan::run(args)?,
        Commands::Path { args } => path::run(args)?,
    }

    Ok(())
}

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shift_dispatch::reader::read_load_file;
use shift_dispatch::{DispatchConfig, MultiStartSolver};
use tracing::{info, warn};

/// Assigns the loads of a problem file to drivers and prints one route per line.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The problem file to solve
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// JSON file with dispatch settings; unset fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Candidate pool size per decision (runs twice as many trials)
    #[arg(short = 'k', long)]
    neighbors: Option<usize>,

    /// Seed for the randomized trials
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run trials in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Print the full solution as JSON
    #[arg(long)]
    json: bool,

    /// Log trial costs and assignment counts
    #[arg(short, long)]
    debug: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<DispatchConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => DispatchConfig::default(),
    };
    if let Some(k) = cli.neighbors {
        config = config.with_max_neighbors(k);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.parallel {
        config = config.with_parallel(true);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = load_config(&cli)?;
    let solver = MultiStartSolver::new(config)?;
    let loads = read_load_file(&cli.file)?;

    let Some(result) = solver.run(&loads) else {
        warn!("No solution could be found");
        return Ok(());
    };
    let best = result.best();

    if cli.debug {
        info!(
            total = best.num_served(),
            unique = best.num_unique_served(),
            "solution assignment counts"
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in best.route_lines() {
            println!("{line}");
        }
    }

    Ok(())
}

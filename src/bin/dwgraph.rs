//! dwgraph CLI: analyze directed weighted graph snapshots.
//!
//! Usage:
//!   dwgraph inspect <file>
//!   dwgraph path <file> <src> <dest>
//!   dwgraph components <file> [--strong]
//!   dwgraph copy <input> <output>

use clap::{ArgAction, Parser, Subcommand};
use dwgraph::{DiGraph, DirectedWeightedGraph, EngineConfig, GraphAlgo, NodeKey};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "dwgraph",
    version,
    about = "Directed weighted graph analysis engine"
)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print size, connectivity and grouping summary of a snapshot
    Inspect {
        /// Snapshot file
        file: PathBuf,
    },
    /// Print the shortest path between two nodes
    Path {
        /// Snapshot file
        file: PathBuf,
        /// Source node key
        src: i32,
        /// Destination node key
        dest: i32,
    },
    /// List node groups
    Components {
        /// Snapshot file
        file: PathBuf,
        /// Use strongly connected components instead of reachability groups
        #[arg(long)]
        strong: bool,
    },
    /// Load a snapshot and write a deep copy of it
    Copy {
        /// Snapshot to read
        input: PathBuf,
        /// Snapshot to write
        output: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_engine(config: &EngineConfig, file: &Path) -> Result<GraphAlgo<DiGraph>, String> {
    let mut algo = GraphAlgo::default().with_config(config.clone());
    algo.try_load(file)
        .map_err(|e| format!("Failed to load '{}': {}", file.display(), e))?;
    Ok(algo)
}

fn format_group(group: &[NodeKey]) -> String {
    let keys: Vec<String> = group.iter().map(|k| k.to_string()).collect();
    format!("[{}]", keys.join(", "))
}

fn cmd_inspect(algo: &GraphAlgo) -> i32 {
    let graph = algo.graph();
    let (nodes, edges) = {
        let g = graph.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        (g.node_count(), g.edge_count())
    };
    let strong = algo.strong_components();
    let largest = strong.iter().map(Vec::len).max().unwrap_or(0);

    println!("{:<24}{:>10}", "nodes", nodes);
    println!("{:<24}{:>10}", "edges", edges);
    println!("{:<24}{:>10}", "strongly connected", algo.is_connected());
    println!("{:<24}{:>10}", "components", strong.len());
    println!("{:<24}{:>10}", "largest component", largest);
    0
}

fn cmd_path(algo: &GraphAlgo, src: i32, dest: i32) -> i32 {
    let result = algo.route(src, dest);
    if !result.found {
        eprintln!("No path from {} to {}", src, dest);
        return 1;
    }
    let keys: Vec<NodeKey> = result.path.iter().map(|n| n.key).collect();
    println!("distance: {}", result.distance);
    println!("path: {}", format_group(&keys));
    0
}

fn cmd_components(algo: &GraphAlgo, strong: bool) -> i32 {
    let groups = if strong {
        algo.strong_components()
    } else {
        algo.components()
    };
    for group in &groups {
        println!("{}", format_group(group));
    }
    0
}

fn cmd_copy(algo: &GraphAlgo, config: &EngineConfig, output: &Path) -> i32 {
    let copy = GraphAlgo::new(algo.copy()).with_config(config.clone());
    match copy.try_save(output) {
        Ok(()) => {
            println!("Wrote copy to '{}'", output.display());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match EngineConfig::resolve(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let file = match &cli.command {
        Commands::Inspect { file } | Commands::Path { file, .. } | Commands::Components { file, .. } => file,
        Commands::Copy { input, .. } => input,
    };
    let algo = match open_engine(&config, file) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Inspect { .. } => cmd_inspect(&algo),
        Commands::Path { src, dest, .. } => cmd_path(&algo, src, dest),
        Commands::Components { strong, .. } => cmd_components(&algo, strong),
        Commands::Copy { output, .. } => cmd_copy(&algo, &config, &output),
    };
    std::process::exit(code);
}

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use heapviz::{repl, MaxHeap};

#[derive(Parser, Debug)]
#[command(name = "heapviz", about = "Interactive max-heap visualizer")]
struct Cli {
    /// Initial elements, heapified before the prompt appears.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    seed: Vec<i64>,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!("Heap Visualizer");
    println!("Commands: add <int>, remove, print, note: <text>, exit");

    let mut heap = MaxHeap::from_vec(cli.seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut heap, stdin.lock(), stdout.lock()).context("command loop failed")?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! `tdata`: render JSON rows through a table config.
//!
//! ```text
//! tdata render --data clientes.json --config clientes.yaml --tab inativos
//! tdata tabs   --data clientes.json --config clientes.yaml
//! tdata filter --config clientes.yaml --set nome=Ana --set cidade=
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tabledata::BorderStyle;
use tracing_subscriber::EnvFilter;

/// Declarative data tables from the command line
#[derive(Parser)]
#[command(name = "tdata")]
#[command(version)]
#[command(about = "Render JSON rows through a declarative table config")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tab bar and the table for the active tab
    Render(RenderArgs),

    /// Package server filter values into query parameters
    Filter(FilterArgs),

    /// List tab keys, labels and badge counts
    Tabs(TabsArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    /// JSON file holding an array of row objects
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Table config (.yaml, .yml or .json)
    #[arg(long, value_name = "FILE")]
    pub config: PathBuf,

    /// Tab key to show instead of the configured default
    #[arg(long, value_name = "KEY")]
    pub tab: Option<String>,

    /// Total width; defaults to the terminal width
    #[arg(long)]
    pub width: Option<usize>,

    /// Border style: none, ascii, light, heavy, double or rounded
    #[arg(long, default_value = "light")]
    pub border: BorderStyle,

    /// Print the assembled view as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Table config (.yaml, .yml or .json)
    #[arg(long, value_name = "FILE")]
    pub config: PathBuf,

    /// Filter value as field=value; repeatable
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Print the filter change as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TabsArgs {
    /// JSON file holding an array of row objects
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Table config (.yaml, .yml or .json)
    #[arg(long, value_name = "FILE")]
    pub config: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Render(args) => commands::render(&args)?,
        Commands::Filter(args) => commands::filter(&args)?,
        Commands::Tabs(args) => commands::tabs(&args)?,
    };
    println!("{}", output);
    Ok(())
}

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{cat::CatArgs, fields::FieldsArgs, schema::SchemaArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pqinspect", about = "Inspect Parquet schema trees and reinterpreted values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the schema tree
    Schema(SchemaArgs),
    /// List the columns that need reinterpretation
    Fields(FieldsArgs),
    /// Print columns with decimal, interval and INT96 values reinterpreted
    Cat(CatArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pqinspect=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schema(args) => args.run(),
        Commands::Fields(args) => args.run(),
        Commands::Cat(args) => args.run(),
    }
}

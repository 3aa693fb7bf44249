use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use pqtree::{ParquetReader, core::format_schema_tree};

#[derive(Args)]
pub struct SchemaArgs {
    /// Parquet file location (path or file:// URI)
    input: String,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let reader = ParquetReader::builder().with_default_sources().build();
        let file = reader.open(&self.input)?;
        let text = format_schema_tree(file.schema_tree())?;

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}

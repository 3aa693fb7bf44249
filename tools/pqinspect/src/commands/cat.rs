use std::sync::Arc;

use anyhow::{Result, bail};
use arrow::{
    datatypes::{Field, Schema},
    record_batch::RecordBatch,
    util::pretty::print_batches,
};
use clap::Args;
use pqtree::{ParquetReader, column_to_arrow};

#[derive(Args)]
pub struct CatArgs {
    /// Parquet file location (path or file:// URI)
    input: String,

    /// Dotted column path; repeat for several columns (all leaves if omitted)
    #[arg(short, long = "column")]
    columns: Vec<String>,

    /// Records decoded per read call
    #[arg(long, default_value_t = 1024)]
    batch_size: usize,
}

impl CatArgs {
    pub fn run(self) -> Result<()> {
        let reader = ParquetReader::builder()
            .with_default_sources()
            .with_batch_size(self.batch_size)
            .build();
        let file = reader.open(&self.input)?;
        let paths = if self.columns.is_empty() {
            file.column_paths()
        } else {
            self.columns
        };

        if paths.is_empty() {
            tracing::info!(location = %file.location(), "file has no leaf columns");
            return Ok(());
        }

        let columns = file.read_columns(&paths)?;
        let mut fields = Vec::with_capacity(columns.len());
        let mut arrays = Vec::with_capacity(columns.len());
        for column in &columns {
            let array = column_to_arrow(column)?;
            fields.push(Field::new(&column.path, array.data_type().clone(), true));
            arrays.push(array);
        }

        if let Some(len) = arrays.first().map(|a| a.len())
            && arrays.iter().any(|a| a.len() != len)
        {
            bail!("columns have different value counts; repeated columns must be read one at a time");
        }

        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?;
        print_batches(&[batch])?;
        Ok(())
    }
}

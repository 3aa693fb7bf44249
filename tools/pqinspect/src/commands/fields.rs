use anyhow::Result;
use clap::Args;
use pqtree::{ParquetReader, core::InterimLayerPolicy};

#[derive(Args)]
pub struct FieldsArgs {
    /// Parquet file location (path or file:// URI)
    input: String,

    /// How LIST/MAP wrapper layers appear in paths: keep | collapse
    #[arg(long, default_value = "keep")]
    interim_layer: InterimLayerPolicy,
}

impl FieldsArgs {
    pub fn run(self) -> Result<()> {
        let reader = ParquetReader::builder().with_default_sources().build();
        let file = reader.open(&self.input)?;
        let fields = file.reinterpret_fields(self.interim_layer);

        if fields.is_empty() {
            tracing::info!(location = %file.location(), "no columns need reinterpretation");
            return Ok(());
        }

        for (path, field) in fields.iter() {
            let physical = field
                .physical_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{path}\t{}\t{physical}\tprecision={}\tscale={}",
                field.converted_type, field.precision, field.scale
            );
        }
        Ok(())
    }
}

use std::{error::Error, sync::Arc};

use parquet::{
    file::{properties::WriterProperties, writer::SerializedFileWriter},
    schema::parser::parse_message_type,
};
use pqtree::{
    MemorySource, ParquetReader,
    core::{
        ConvertedType, InterimLayerPolicy, PhysicalType, Repetition, build_schema_tree,
        format_schema_tree,
    },
    schema_elements_from_parquet,
};

const MESSAGE: &str = "
message spark_schema {
  required int64 id;
  optional group addr {
    required fixed_len_byte_array(5) amount (DECIMAL(10,2));
    optional binary city (UTF8);
  }
  optional group tags (LIST) {
    repeated group list {
      optional int32 element (DECIMAL(9,3));
    }
  }
  optional int96 created;
}
";

fn schema_only_file(message: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let schema = Arc::new(parse_message_type(message)?);
    let props = Arc::new(WriterProperties::builder().build());
    let writer = SerializedFileWriter::new(Vec::new(), schema, props)?;
    Ok(writer.into_inner()?)
}

#[test]
fn elements_are_preorder_with_child_counts() -> Result<(), Box<dyn Error>> {
    let schema = parse_message_type(MESSAGE)?;
    let elements = schema_elements_from_parquet(&schema);

    let names: Vec<_> = elements.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "spark_schema",
            "id",
            "addr",
            "amount",
            "city",
            "tags",
            "list",
            "element",
            "created"
        ]
    );

    let root = &elements[0];
    assert_eq!(root.num_children, Some(4));
    assert_eq!(root.physical_type, None);
    assert_eq!(root.repetition, None);

    let addr = &elements[2];
    assert_eq!(addr.num_children, Some(2));
    assert_eq!(addr.repetition, Some(Repetition::Optional));
    assert_eq!(addr.converted_type, None);

    let amount = &elements[3];
    assert_eq!(amount.physical_type, Some(PhysicalType::FixedLenByteArray));
    assert_eq!(amount.converted_type, Some(ConvertedType::Decimal));
    assert_eq!(amount.type_length, Some(5));
    assert_eq!((amount.precision, amount.scale), (Some(10), Some(2)));
    assert_eq!(amount.num_children, None);

    let city = &elements[4];
    assert_eq!(city.converted_type, Some(ConvertedType::Utf8));
    assert_eq!(city.type_length, None);
    assert_eq!((city.precision, city.scale), (None, None));

    assert_eq!(elements[5].converted_type, Some(ConvertedType::List));
    assert_eq!(elements[6].repetition, Some(Repetition::Repeated));
    assert_eq!(elements[8].physical_type, Some(PhysicalType::Int96));
    Ok(())
}

#[test]
fn adapted_elements_build_the_same_tree_shape() -> Result<(), Box<dyn Error>> {
    let schema = parse_message_type(MESSAGE)?;
    let elements = schema_elements_from_parquet(&schema);
    let tree = build_schema_tree(elements.clone())?;

    assert_eq!(tree.to_elements(), elements);
    assert_eq!(
        tree.leaf_paths(),
        vec![
            "id",
            "addr.amount",
            "addr.city",
            "tags.list.element",
            "created"
        ]
    );

    let fields = tree_fields(&tree, InterimLayerPolicy::Collapse);
    assert_eq!(fields, vec!["addr.amount", "created", "tags.element"]);
    Ok(())
}

fn tree_fields(tree: &pqtree::core::SchemaNode, policy: InterimLayerPolicy) -> Vec<String> {
    pqtree::core::reinterpret_fields(tree, policy)
        .paths()
        .map(str::to_string)
        .collect()
}

#[test]
fn opened_file_exposes_footer_schema() -> Result<(), Box<dyn Error>> {
    let source = MemorySource::new().with_object("empty.parquet", schema_only_file(MESSAGE)?);
    let reader = ParquetReader::builder().with_source(Box::new(source)).build();
    let file = reader.open("mem://empty.parquet")?;

    assert_eq!(file.num_rows(), 0);
    assert_eq!(file.schema_tree().name(), "spark_schema");
    assert_eq!(
        file.column_paths(),
        vec![
            "id",
            "addr.amount",
            "addr.city",
            "tags.list.element",
            "created"
        ]
    );
    assert_eq!(file.schema_tree().leaf_paths(), file.column_paths());

    let keep: Vec<_> = file
        .reinterpret_fields(InterimLayerPolicy::Keep)
        .paths()
        .map(str::to_string)
        .collect();
    assert_eq!(keep, vec!["addr.amount", "created", "tags.list.element"]);

    let text = format_schema_tree(file.schema_tree())?;
    assert!(text.starts_with("id: { type: int64, repetition: required }\n"));
    assert!(text.contains("amount: { type: fixed_len_byte_array(5), repetition: required, annotation: decimal(10, 2) }"));

    assert!(file.read_raw_column("id")?.is_empty());
    Ok(())
}

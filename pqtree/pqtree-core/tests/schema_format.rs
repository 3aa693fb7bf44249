use pqtree_core::{
    ConvertedType, PhysicalType, Repetition, SchemaElement, build_schema_tree, format_schema_tree,
};

#[test]
fn nested_groups_keep_type_line_and_indentation() -> Result<(), Box<dyn std::error::Error>> {
    let root = build_schema_tree(vec![
        SchemaElement::group("schema", 3),
        SchemaElement::leaf("id", PhysicalType::Int64).with_repetition(Repetition::Required),
        SchemaElement::group("addr", 2).with_repetition(Repetition::Optional),
        SchemaElement::leaf("amount", PhysicalType::FixedLenByteArray)
            .with_type_length(5)
            .with_decimal(10, 2)
            .with_repetition(Repetition::Optional),
        SchemaElement::group("empty", 0).with_repetition(Repetition::Optional),
        SchemaElement::group("tags", 1)
            .with_converted_type(ConvertedType::List)
            .with_repetition(Repetition::Optional),
        SchemaElement::group("list", 1).with_repetition(Repetition::Repeated),
        SchemaElement::leaf("element", PhysicalType::ByteArray)
            .with_converted_type(ConvertedType::Utf8)
            .with_repetition(Repetition::Required),
    ])?;

    let text = format_schema_tree(&root)?;
    let expected = "\
id: { type: int64, repetition: required }
addr:
    type: group
    repetition: optional
    fields:
        amount: { type: fixed_len_byte_array(5), repetition: optional, annotation: decimal(10, 2) }
        empty:
            type: group
            repetition: optional
            fields: []
tags:
    type: group
    repetition: optional
    annotation: list
    fields:
        list:
            type: group
            repetition: repeated
            fields:
                element: { type: byte_array, repetition: required, annotation: utf8 }
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn schema_node_display_matches_formatter() -> Result<(), Box<dyn std::error::Error>> {
    let root = build_schema_tree(vec![
        SchemaElement::group("schema", 1),
        SchemaElement::leaf("stamp", PhysicalType::Int96),
    ])?;
    assert_eq!(root.to_string(), format_schema_tree(&root)?);
    assert_eq!(root.to_string(), "stamp: { type: int96 }\n");
    Ok(())
}

use pqtree_core::{
    ConvertedType, PhysicalType, Repetition, SchemaElement, SchemaNode, SchemaTreeError,
    build_schema_tree,
};

fn group(name: &str, children: Vec<SchemaNode>) -> SchemaNode {
    SchemaNode {
        element: SchemaElement::group(name, children.len()),
        children,
    }
}

fn leaf(name: &str, physical_type: PhysicalType) -> SchemaNode {
    SchemaNode::new(SchemaElement::leaf(name, physical_type))
}

fn sample_tree() -> SchemaNode {
    group(
        "schema",
        vec![
            leaf("id", PhysicalType::Int64),
            group(
                "addr",
                vec![
                    leaf("street", PhysicalType::ByteArray),
                    group("geo", vec![leaf("lat", PhysicalType::Double)]),
                ],
            ),
            group("empty", vec![]),
            leaf("count", PhysicalType::Int32),
        ],
    )
}

#[test]
fn flattened_tree_is_rebuilt_identically() {
    let tree = sample_tree();
    let elements = tree.to_elements();
    assert_eq!(elements.len(), 8);
    assert_eq!(elements[0].name, "schema");
    assert_eq!(elements[2].name, "addr");
    assert_eq!(elements[4].name, "geo");

    let rebuilt = build_schema_tree(elements).unwrap();
    assert_eq!(rebuilt, tree);
}

#[test]
fn root_only_sequence_builds_leaf_root() {
    let root = build_schema_tree(vec![SchemaElement::group("schema", 0)]).unwrap();
    assert_eq!(root.name(), "schema");
    assert!(root.children.is_empty());
    assert!(root.is_struct());
}

#[test]
fn empty_group_keeps_no_children_and_no_type() {
    let tree = build_schema_tree(sample_tree().to_elements()).unwrap();
    let empty = tree.child("empty").unwrap();
    assert!(empty.is_leaf());
    assert!(empty.is_struct());
    assert_eq!(empty.element.physical_type, None);
}

#[test]
fn empty_sequence_is_rejected() {
    let err = build_schema_tree(Vec::new()).unwrap_err();
    assert_eq!(err, SchemaTreeError::Empty);
}

#[test]
fn missing_children_are_rejected() {
    let elements = vec![
        SchemaElement::group("schema", 2),
        SchemaElement::group("addr", 2),
        SchemaElement::leaf("street", PhysicalType::ByteArray),
    ];
    let err = build_schema_tree(elements).unwrap_err();
    assert_eq!(
        err,
        SchemaTreeError::MissingElements {
            parent: "addr".to_string(),
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn leftover_elements_are_rejected() {
    let elements = vec![
        SchemaElement::group("schema", 1),
        SchemaElement::leaf("a", PhysicalType::Int32),
        SchemaElement::leaf("b", PhysicalType::Int32),
        SchemaElement::leaf("c", PhysicalType::Int32),
    ];
    let err = build_schema_tree(elements).unwrap_err();
    assert_eq!(
        err,
        SchemaTreeError::TrailingElements {
            consumed: 2,
            total: 4,
        }
    );
}

#[test]
fn deep_nesting_does_not_recurse() {
    let depth = 100_000;
    let mut elements: Vec<SchemaElement> = (0..depth)
        .map(|i| SchemaElement::group(format!("g{i}"), 1))
        .collect();
    elements.push(SchemaElement::leaf("value", PhysicalType::Int32));

    let root = build_schema_tree(elements).unwrap();

    let mut node = &root;
    let mut levels = 0;
    while let Some(child) = node.children.first() {
        node = child;
        levels += 1;
    }
    assert_eq!(levels, depth);
    assert_eq!(node.name(), "value");

    drop(root);
}

#[test]
fn deep_chain_of_single_groups_is_dropped_without_overflow() {
    let mut root = SchemaNode::new(SchemaElement::leaf("value", PhysicalType::Int32));
    for i in 0..200_000 {
        root = group(&format!("g{i}"), vec![root]);
    }
    assert_eq!(root.name(), "g199999");
    drop(root);
}

#[test]
fn leaf_paths_and_find_use_dotted_paths() {
    let tree = sample_tree();
    assert_eq!(
        tree.leaf_paths(),
        vec!["id", "addr.street", "addr.geo.lat", "empty", "count"]
    );
    let lat = tree.find("addr.geo.lat").unwrap();
    assert_eq!(lat.element.physical_type, Some(PhysicalType::Double));
    assert!(tree.find("addr.missing").is_none());
}

#[test]
fn element_builders_set_annotations() {
    let element = SchemaElement::leaf("amount", PhysicalType::FixedLenByteArray)
        .with_type_length(16)
        .with_decimal(38, 4)
        .with_repetition(Repetition::Optional);
    assert_eq!(element.converted_type, Some(ConvertedType::Decimal));
    assert_eq!(element.precision, Some(38));
    assert_eq!(element.scale, Some(4));
    assert_eq!(element.type_length, Some(16));
    assert_eq!(element.num_children, None);
    assert_eq!(element.repetition, Some(Repetition::Optional));
}

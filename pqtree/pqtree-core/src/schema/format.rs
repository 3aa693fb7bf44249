use std::fmt::{Error, Result, Write as _};

use super::{SchemaElement, SchemaNode};

/// Format the children of `root` in a readable style:
/// leaves are rendered in one line, groups are pretty-printed.
/// The root's own name is omitted, as it is from column paths.
pub fn format_schema_tree(root: &SchemaNode) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for child in &root.children {
        format_node(child, 0, &mut out)?;
    }

    Ok(out)
}

fn format_node(node: &SchemaNode, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    let element = &node.element;

    if element.num_children.is_none() {
        return writeln!(out, "{pad}{}: {{ {} }}", element.name, leaf_attributes(element));
    }

    writeln!(out, "{pad}{}:", element.name)?;
    let pad = " ".repeat(indent + 4);
    writeln!(out, "{pad}type: group")?;
    if let Some(repetition) = element.repetition {
        writeln!(out, "{pad}repetition: {repetition}")?;
    }
    if let Some(annotation) = annotation(element) {
        writeln!(out, "{pad}annotation: {annotation}")?;
    }
    if node.children.is_empty() {
        writeln!(out, "{pad}fields: []")?;
        return Ok(());
    }
    writeln!(out, "{pad}fields:")?;
    for child in &node.children {
        format_node(child, indent + 8, out)?;
    }
    Ok(())
}

fn leaf_attributes(element: &SchemaElement) -> String {
    let mut parts = Vec::with_capacity(4);
    match (element.physical_type, element.type_length) {
        (Some(t), Some(len)) if len > 0 => parts.push(format!("type: {t}({len})")),
        (Some(t), _) => parts.push(format!("type: {t}")),
        (None, _) => parts.push("type: none".to_string()),
    }
    if let Some(repetition) = element.repetition {
        parts.push(format!("repetition: {repetition}"));
    }
    if let Some(annotation) = annotation(element) {
        parts.push(format!("annotation: {annotation}"));
    }
    parts.join(", ")
}

fn annotation(element: &SchemaElement) -> Option<String> {
    let converted = element.converted_type?;
    Some(match (element.precision, element.scale) {
        (Some(p), Some(s)) => format!("{converted}({p}, {s})"),
        _ => converted.to_string(),
    })
}

use tracing::warn;

use super::{InterimLayerPolicy, ReinterpretField, ReinterpretFields};
use crate::schema::{ConvertedType, PhysicalType, SchemaNode};

/// Resolve the reinterpretation map for the whole tree under `root`.
///
/// Keys are dotted paths from the root, with the root's own name excluded.
pub fn reinterpret_fields(root: &SchemaNode, policy: InterimLayerPolicy) -> ReinterpretFields {
    resolve_reinterpret_fields("", root, policy)
}

/// Collect every descendant of `node` whose decoded values need a transform.
///
/// `path` is the dotted path already accumulated to reach `node`; an empty
/// path means `node` is the root. List and map groups are routes only and are
/// never recorded themselves; with [`InterimLayerPolicy::Collapse`] their
/// synthetic interim layer is left out of the resulting paths.
pub fn resolve_reinterpret_fields(
    path: &str,
    node: &SchemaNode,
    policy: InterimLayerPolicy,
) -> ReinterpretFields {
    let mut fields = ReinterpretFields::new();
    collect(path, node, policy, &mut fields);
    fields
}

fn collect(path: &str, node: &SchemaNode, policy: InterimLayerPolicy, out: &mut ReinterpretFields) {
    for child in &node.children {
        let child_path = join_path(path, child.name());
        let element = &child.element;

        if child.is_struct() {
            collect(&child_path, child, policy, out);
            continue;
        }

        // The physical type alone decides INT96; its annotations are unreliable.
        if element.physical_type == Some(PhysicalType::Int96) {
            record(out, child_path, ReinterpretField::int96_timestamp());
            continue;
        }

        let Some(converted_type) = element.converted_type else {
            continue;
        };
        match converted_type {
            ConvertedType::List | ConvertedType::Map => {
                // A leaf directly under the wrapper (legacy two-level list)
                // has no interim layer to skip.
                let route = match child.children.first() {
                    Some(interim) if policy.collapses() && !interim.is_leaf() => interim,
                    _ => child,
                };
                collect(&child_path, route, policy, out);
            }
            ConvertedType::MapKeyValue => collect(&child_path, child, policy, out),
            ConvertedType::Decimal | ConvertedType::Interval => {
                let field = ReinterpretField {
                    physical_type: element.physical_type,
                    converted_type,
                    precision: element.precision.unwrap_or(0),
                    scale: element.scale.unwrap_or(0),
                };
                record(out, child_path, field);
            }
            _ if !child.is_leaf() => collect(&child_path, child, policy, out),
            _ => {}
        }
    }
}

fn record(out: &mut ReinterpretFields, path: String, field: ReinterpretField) {
    if out.insert(path.clone(), field).is_some() {
        warn!(%path, "duplicate reinterpret path in schema, keeping the last definition");
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

//! Query documents as data: a named selection tree plus its wire rendering.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::QueryError;

/// One selected field. Leaves have an empty sub-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub selection: &'static [Field],
}

impl Field {
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            selection: &[],
        }
    }

    pub const fn object(name: &'static str, selection: &'static [Field]) -> Self {
        Self { name, selection }
    }

    pub fn is_leaf(&self) -> bool {
        self.selection.is_empty()
    }
}

/// A named, parameterless query operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDocument {
    operation_name: &'static str,
    selection: &'static [Field],
}

impl QueryDocument {
    pub const fn query(operation_name: &'static str, selection: &'static [Field]) -> Self {
        Self {
            operation_name,
            selection,
        }
    }

    pub fn operation_name(&self) -> &'static str {
        self.operation_name
    }

    pub fn selection(&self) -> &'static [Field] {
        self.selection
    }

    /// Render the wire string (`query Name { ... }`, two-space indentation).
    pub fn render(&self) -> String {
        let mut out = format!("query {} {{\n", self.operation_name);
        write_selection(&mut out, self.selection, 1);
        out.push('}');
        out
    }

    /// Dotted paths of every leaf field, in selection order.
    pub fn field_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_paths(&mut paths, self.selection, "");
        paths
    }

    /// Check that a response `data` object carries exactly the selected fields.
    ///
    /// `null` is accepted for any field; lists are checked element-wise.
    pub fn check_response(&self, data: &Value) -> Result<(), QueryError> {
        check_object(data, self.selection, "")
    }
}

/// Binds a document to its variables and typed response data.
pub trait GraphQlQuery {
    type Variables: Serialize;
    type Data: DeserializeOwned;

    fn document() -> &'static QueryDocument;
}

/// Variables of a parameterless operation; serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoVariables {}

fn write_selection(out: &mut String, fields: &[Field], depth: usize) {
    let indent = "  ".repeat(depth);
    for field in fields {
        out.push_str(&indent);
        out.push_str(field.name);
        if field.is_leaf() {
            out.push('\n');
        } else {
            out.push_str(" {\n");
            write_selection(out, field.selection, depth + 1);
            out.push_str(&indent);
            out.push_str("}\n");
        }
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn collect_paths(paths: &mut Vec<String>, fields: &[Field], prefix: &str) {
    for field in fields {
        let path = join(prefix, field.name);
        if field.is_leaf() {
            paths.push(path);
        } else {
            collect_paths(paths, field.selection, &path);
        }
    }
}

fn check_object(value: &Value, fields: &[Field], path: &str) -> Result<(), QueryError> {
    let Value::Object(map) = value else {
        return Err(QueryError::shape(path, "expected an object"));
    };

    if let Some(extra) = map.keys().find(|k| !fields.iter().any(|f| f.name == k.as_str())) {
        return Err(QueryError::shape(join(path, extra), "field was not selected"));
    }

    for field in fields {
        let field_path = join(path, field.name);
        match map.get(field.name) {
            Some(v) => check_value(v, field, &field_path)?,
            None => return Err(QueryError::shape(field_path, "missing field")),
        }
    }
    Ok(())
}

fn check_value(value: &Value, field: &Field, path: &str) -> Result<(), QueryError> {
    match value {
        Value::Null => Ok(()),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                check_value(item, field, &format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        Value::Object(_) if field.is_leaf() => {
            Err(QueryError::shape(path, "scalar field returned an object"))
        }
        Value::Object(_) => check_object(value, field.selection, path),
        _ if field.is_leaf() => Ok(()),
        _ => Err(QueryError::shape(path, "expected an object")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    static ORDER: QueryDocument = QueryDocument::query(
        "OpenOrders",
        &[Field::object(
            "openOrders",
            &[
                Field::scalar("id"),
                Field::object("lines", &[Field::scalar("sku"), Field::scalar("qty")]),
            ],
        )],
    );

    #[test]
    fn renders_nested_selection() {
        let expected = "query OpenOrders {\n  openOrders {\n    id\n    lines {\n      sku\n      qty\n    }\n  }\n}";
        assert_eq!(ORDER.render(), expected);
    }

    #[test]
    fn field_paths_flatten_leaves() {
        assert_eq!(
            ORDER.field_paths(),
            vec!["openOrders.id", "openOrders.lines.sku", "openOrders.lines.qty"]
        );
    }

    #[test]
    fn accepts_lists_and_nulls() {
        let data = json!({
            "openOrders": [
                { "id": "a", "lines": [{ "sku": "BC-100", "qty": 500 }] },
                { "id": "b", "lines": null },
            ]
        });
        assert_eq!(ORDER.check_response(&data), Ok(()));
    }

    #[test]
    fn reports_path_of_missing_field() {
        let data = json!({ "openOrders": [{ "id": "a", "lines": [{ "sku": "BC-100" }] }] });
        assert_eq!(
            ORDER.check_response(&data),
            Err(QueryError::shape("openOrders[0].lines[0].qty", "missing field"))
        );
    }

    #[test]
    fn rejects_unselected_field() {
        let data = json!({ "openOrders": { "id": "a", "lines": [], "total": 3 } });
        assert_eq!(
            ORDER.check_response(&data),
            Err(QueryError::shape("openOrders.total", "field was not selected"))
        );
    }

    #[test]
    fn rejects_object_in_scalar_position() {
        let data = json!({ "openOrders": { "id": { "raw": 1 }, "lines": [] } });
        assert!(matches!(
            ORDER.check_response(&data),
            Err(QueryError::ShapeMismatch { path, .. }) if path == "openOrders.id"
        ));
    }

    #[test]
    fn no_variables_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(NoVariables {}).unwrap(), json!({}));
    }
}

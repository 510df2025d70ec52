//! Table configuration model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a cell renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Text,
    /// Active/inactive or status pill
    Badge,
    Date,
    /// A joined display value resolved from another resource
    Reference,
}

/// Column configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Key into each row object
    pub key: String,
    pub label: String,
    pub kind: CellKind,
}

impl Column {
    fn new(key: impl Into<String>, label: impl Into<String>, kind: CellKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, CellKind::Text)
    }

    pub fn badge(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, CellKind::Badge)
    }

    pub fn date(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, CellKind::Date)
    }

    pub fn reference(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, CellKind::Reference)
    }
}

/// Table model: column configuration plus the current rows
///
/// Rows are plain JSON objects keyed by column `key`; reference columns
/// already carry the joined display value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableModel {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Value>,
}

impl TableModel {
    pub fn new(title: impl Into<String>, columns: Vec<Column>, rows: Vec<Value>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_model_serializes_with_shell_field_names() {
        let table = TableModel::new(
            "Users",
            vec![
                Column::text("document", "Document"),
                Column::badge("is_active", "State"),
            ],
            vec![json!({"document": "123", "is_active": true})],
        );

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["title"], "Users");
        assert_eq!(value["columns"][0]["key"], "document");
        assert_eq!(value["columns"][1]["kind"], "badge");
        assert_eq!(value["rows"][0]["document"], "123");
    }
}

//! Form configuration model (the create/edit modal)

use serde::{Deserialize, Serialize};

/// Input control kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Text,
    Email,
    Password,
    Select,
    Textarea,
    Date,
}

/// A select option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub control: Control,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl Field {
    fn new(name: impl Into<String>, label: impl Into<String>, control: Control) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            control,
            required: false,
            options: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, Control::Text)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, Control::Email)
    }

    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, Control::Password)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, Control::Textarea)
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, Control::Date)
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        let mut field = Self::new(name, label, Control::Select);
        field.options = options;
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Form model driving the create/edit modal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormModel {
    pub title: String,
    pub fields: Vec<Field>,
}

impl FormModel {
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_field_carries_its_options() {
        let field = Field::select(
            "role_id",
            "Role",
            vec![SelectOption::new("1", "Admin"), SelectOption::new("2", "Tech")],
        )
        .required();

        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["control"], "select");
        assert_eq!(value["required"], true);
        assert_eq!(value["options"][1]["label"], "Tech");
    }

    #[test]
    fn empty_options_are_omitted_from_the_wire() {
        let value = serde_json::to_value(Field::text("name", "Name")).unwrap();
        assert!(value.get("options").is_none());
    }
}

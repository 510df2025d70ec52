//! Page model: what one entity screen needs to render

use serde::{Deserialize, Serialize};

use crate::ui::{FormModel, TableModel};

/// A page payload: the list table and/or the create-edit form
///
/// Most CRUD screens carry both; the action log has no form, the system
/// config screen has no table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormModel>,
}

impl PageModel {
    pub fn new(table: TableModel, form: FormModel) -> Self {
        Self {
            table: Some(table),
            form: Some(form),
        }
    }

    pub fn table_only(table: TableModel) -> Self {
        Self {
            table: Some(table),
            form: None,
        }
    }

    pub fn form_only(form: FormModel) -> Self {
        Self {
            table: None,
            form: Some(form),
        }
    }
}

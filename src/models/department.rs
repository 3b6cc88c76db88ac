use serde::{Deserialize, Serialize};

use super::{Column, Entity, FieldValue};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Zero on create means the store assigns one.
    #[serde(default, alias = "Id")]
    pub id: i32,
    #[serde(rename = "departmentName", alias = "DepartmentName")]
    #[sqlx(rename = "department_name")]
    pub name: Option<String>,
}

impl Entity for Department {
    const TABLE: &'static str = "department";
    const KEY: &'static str = "id";
    const COLUMNS: &'static [Column] = &[
        Column { field: "id", name: "id" },
        Column { field: "departmentName", name: "department_name" },
    ];

    fn key(&self) -> i32 {
        self.id
    }

    #[cfg(test)]
    fn set_key(&mut self, key: i32) {
        self.id = key;
    }

    fn field_values(&self) -> Vec<FieldValue> {
        vec![FieldValue::Text(self.name.clone())]
    }
}

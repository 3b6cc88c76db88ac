use serde::{Deserialize, Serialize};

use super::{Column, Entity, FieldValue};

/// `department_id` is a bare foreign key; nothing checks that the
/// department exists.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Employee {
    #[serde(default, alias = "Id")]
    pub id: i32,
    #[serde(rename = "employee_name", alias = "Employee_name")]
    #[sqlx(rename = "employee_name")]
    pub name: Option<String>,
    #[serde(alias = "Email")]
    pub email: Option<String>,
    #[serde(alias = "Phone")]
    pub phone: Option<String>,
    #[serde(alias = "Address")]
    pub address: Option<String>,
    #[serde(rename = "departmentId", alias = "DepartmentId", default)]
    #[sqlx(rename = "departmentid")]
    pub department_id: i32,
}

impl Entity for Employee {
    const TABLE: &'static str = "employee";
    const KEY: &'static str = "id";
    const COLUMNS: &'static [Column] = &[
        Column { field: "id", name: "id" },
        Column { field: "employee_name", name: "employee_name" },
        Column { field: "email", name: "email" },
        Column { field: "phone", name: "phone" },
        Column { field: "address", name: "address" },
        Column { field: "departmentId", name: "departmentid" },
    ];

    fn key(&self) -> i32 {
        self.id
    }

    #[cfg(test)]
    fn set_key(&mut self, key: i32) {
        self.id = key;
    }

    fn field_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.name.clone()),
            FieldValue::Text(self.email.clone()),
            FieldValue::Text(self.phone.clone()),
            FieldValue::Text(self.address.clone()),
            FieldValue::Int(self.department_id),
        ]
    }
}

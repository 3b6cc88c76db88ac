pub mod department;
pub mod employee;

use std::collections::HashSet;

/// One entry of an entity's field-to-column mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Key used in the JSON representation.
    pub field: &'static str,
    /// Column name in the database table.
    pub name: &'static str,
}

/// A bindable value for a non-key column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i32),
    Text(Option<String>),
}

/// A record stored in one table with an integer primary key.
///
/// `COLUMNS` is the single source of truth for the SQL the store issues;
/// the key column comes first and `field_values` yields the remaining
/// columns in the same order.
pub trait Entity: Clone + Send + Sync + 'static {
    const TABLE: &'static str;
    const KEY: &'static str;
    const COLUMNS: &'static [Column];

    fn key(&self) -> i32;

    /// Only the in-memory test store assigns keys itself.
    #[cfg(test)]
    fn set_key(&mut self, key: i32);

    fn field_values(&self) -> Vec<FieldValue>;

    /// Columns other than the primary key, in binding order.
    fn value_columns() -> Vec<&'static str> {
        Self::COLUMNS
            .iter()
            .map(|c| c.name)
            .filter(|name| *name != Self::KEY)
            .collect()
    }
}

/// Checks that a mapping table is usable before any query is built from it.
pub fn validate_mapping<E: Entity>() -> Result<(), String> {
    let mut seen = HashSet::new();
    for column in E::COLUMNS {
        if column.name.is_empty() || column.field.is_empty() {
            return Err(format!("{}: empty name in column mapping", E::TABLE));
        }
        if !seen.insert(column.name) {
            return Err(format!("{}: column '{}' mapped twice", E::TABLE, column.name));
        }
    }

    if E::COLUMNS.first().map(|c| c.name) != Some(E::KEY) {
        return Err(format!("{}: key column '{}' must be mapped first", E::TABLE, E::KEY));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::department::Department;
    use crate::models::employee::Employee;

    fn json_keys<T: serde::Serialize>(value: &T) -> Vec<String> {
        let mut keys: Vec<String> = serde_json::to_value(value)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    fn mapped_fields<E: Entity>() -> Vec<String> {
        let mut fields: Vec<String> = E::COLUMNS.iter().map(|c| c.field.to_string()).collect();
        fields.sort();
        fields
    }

    #[test]
    fn mappings_are_valid() {
        assert_eq!(validate_mapping::<Department>(), Ok(()));
        assert_eq!(validate_mapping::<Employee>(), Ok(()));
    }

    #[test]
    fn mapped_fields_match_json_representation() {
        assert_eq!(mapped_fields::<Department>(), json_keys(&Department::default()));
        assert_eq!(mapped_fields::<Employee>(), json_keys(&Employee::default()));
    }

    #[test]
    fn field_values_line_up_with_value_columns() {
        let employee = Employee::default();
        assert_eq!(employee.field_values().len(), Employee::value_columns().len());

        let department = Department::default();
        assert_eq!(department.field_values().len(), Department::value_columns().len());
    }

    #[derive(Clone)]
    struct Broken;

    impl Entity for Broken {
        const TABLE: &'static str = "broken";
        const KEY: &'static str = "id";
        const COLUMNS: &'static [Column] = &[
            Column { field: "id", name: "id" },
            Column { field: "label", name: "label" },
            Column { field: "title", name: "label" },
        ];

        fn key(&self) -> i32 {
            0
        }

        fn set_key(&mut self, _key: i32) {}

        fn field_values(&self) -> Vec<FieldValue> {
            Vec::new()
        }
    }

    #[test]
    fn duplicate_column_is_rejected() {
        let err = validate_mapping::<Broken>().unwrap_err();
        assert!(err.contains("'label' mapped twice"), "{err}");
    }
}

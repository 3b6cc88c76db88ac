//! In-memory store used by the handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::Store;
use crate::errors::StoreError;
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::models::Entity;

struct Table<E> {
    rows: BTreeMap<i32, E>,
}

impl<E: Entity> Table<E> {
    fn new() -> Self {
        Self { rows: BTreeMap::new() }
    }

    fn insert(&mut self, entity: &E) -> Result<E, StoreError> {
        let mut row = entity.clone();
        if row.key() == 0 {
            let next = self.rows.keys().next_back().map_or(1, |max| max + 1);
            row.set_key(next);
        } else if self.rows.contains_key(&row.key()) {
            return Err(StoreError::Database(sqlx::Error::Protocol(format!(
                "duplicate key value violates unique constraint \"{}_pkey\"",
                E::TABLE
            ))));
        }
        self.rows.insert(row.key(), row.clone());
        Ok(row)
    }

    fn replace(&mut self, entity: &E) -> bool {
        match self.rows.get_mut(&entity.key()) {
            Some(row) => {
                *row = entity.clone();
                true
            }
            None => false,
        }
    }
}

#[derive(Default, Clone, Copy)]
enum Mode {
    #[default]
    Healthy,
    Failing,
}

pub struct MemoryStore {
    departments: Mutex<Table<Department>>,
    employees: Mutex<Table<Employee>>,
    mode: Mode,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            departments: Mutex::new(Table::new()),
            employees: Mutex::new(Table::new()),
            mode: Mode::Healthy,
        }
    }

    /// Every call fails as if the pool could not hand out a connection.
    pub fn failing() -> Self {
        Self { mode: Mode::Failing, ..Self::new() }
    }

    pub fn seed_department(&self, name: &str) -> Department {
        let department = Department { id: 0, name: Some(name.to_string()) };
        self.departments.lock().unwrap().insert(&department).unwrap()
    }

    pub fn seed_employee(&self, employee: Employee) -> Employee {
        self.employees.lock().unwrap().insert(&employee).unwrap()
    }

    pub fn department(&self, id: i32) -> Option<Department> {
        self.departments.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn employee(&self, id: i32) -> Option<Employee> {
        self.employees.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.lock().unwrap().rows.len()
    }

    fn check(&self) -> Result<(), StoreError> {
        match self.mode {
            Mode::Healthy => Ok(()),
            Mode::Failing => Err(StoreError::Database(sqlx::Error::PoolTimedOut)),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        self.check()?;
        Ok(self.departments.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_department(&self, id: i32) -> Result<Option<Department>, StoreError> {
        self.check()?;
        Ok(self.department(id))
    }

    async fn department_exists(&self, id: i32) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.departments.lock().unwrap().rows.contains_key(&id))
    }

    async fn insert_department(&self, department: &Department) -> Result<Department, StoreError> {
        self.check()?;
        self.departments.lock().unwrap().insert(department)
    }

    async fn replace_department(&self, department: &Department) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.departments.lock().unwrap().replace(department))
    }

    async fn delete_department(&self, id: i32) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.departments.lock().unwrap().rows.remove(&id).is_some())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.check()?;
        Ok(self.employees.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_employee(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        self.check()?;
        Ok(self.employee(id))
    }

    async fn employee_exists(&self, id: i32) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.employees.lock().unwrap().rows.contains_key(&id))
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<Employee, StoreError> {
        self.check()?;
        self.employees.lock().unwrap().insert(employee)
    }

    async fn replace_employee(&self, employee: &Employee) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.employees.lock().unwrap().replace(employee))
    }

    async fn delete_employee(&self, id: i32) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.employees.lock().unwrap().rows.remove(&id).is_some())
    }
}

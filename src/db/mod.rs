pub mod postgres;
pub mod schema;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::errors::StoreError;
use crate::models::department::Department;
use crate::models::employee::Employee;

pub use postgres::PgStore;

/// One method per store round-trip. A missing record is `None` or `false`,
/// never an error.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_departments(&self) -> Result<Vec<Department>, StoreError>;
    async fn find_department(&self, id: i32) -> Result<Option<Department>, StoreError>;
    async fn department_exists(&self, id: i32) -> Result<bool, StoreError>;
    async fn insert_department(&self, department: &Department) -> Result<Department, StoreError>;
    /// Overwrites every non-key column. Returns whether a row matched.
    async fn replace_department(&self, department: &Department) -> Result<bool, StoreError>;
    async fn delete_department(&self, id: i32) -> Result<bool, StoreError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;
    async fn find_employee(&self, id: i32) -> Result<Option<Employee>, StoreError>;
    async fn employee_exists(&self, id: i32) -> Result<bool, StoreError>;
    async fn insert_employee(&self, employee: &Employee) -> Result<Employee, StoreError>;
    async fn replace_employee(&self, employee: &Employee) -> Result<bool, StoreError>;
    async fn delete_employee(&self, id: i32) -> Result<bool, StoreError>;
}

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

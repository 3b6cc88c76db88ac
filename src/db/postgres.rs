use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::Store;
use crate::errors::StoreError;
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::models::{Entity, FieldValue};

/// Store backed by a shared Postgres pool. Each call is one round-trip.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list<E>(&self) -> Result<Vec<E>, StoreError>
    where
        E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
    {
        let sql = format!("{} ORDER BY {}", select_sql::<E>(), E::KEY);
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find<E>(&self, id: i32) -> Result<Option<E>, StoreError>
    where
        E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
    {
        let sql = format!("{} WHERE {} = $1", select_sql::<E>(), E::KEY);
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists<E: Entity>(&self, id: i32) -> Result<bool, StoreError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)", E::TABLE, E::KEY);
        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn insert<E>(&self, entity: &E) -> Result<E, StoreError>
    where
        E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
    {
        let mut query = insert_query(entity);
        let row = query.build_query_as::<E>().fetch_one(&self.pool).await?;
        Ok(row)
    }

    async fn replace<E: Entity>(&self, entity: &E) -> Result<bool, StoreError> {
        let mut query = replace_query(entity);
        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete<E: Entity>(&self, id: i32) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::KEY);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        self.list().await
    }

    async fn find_department(&self, id: i32) -> Result<Option<Department>, StoreError> {
        self.find(id).await
    }

    async fn department_exists(&self, id: i32) -> Result<bool, StoreError> {
        self.exists::<Department>(id).await
    }

    async fn insert_department(&self, department: &Department) -> Result<Department, StoreError> {
        self.insert(department).await
    }

    async fn replace_department(&self, department: &Department) -> Result<bool, StoreError> {
        self.replace(department).await
    }

    async fn delete_department(&self, id: i32) -> Result<bool, StoreError> {
        self.delete::<Department>(id).await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.list().await
    }

    async fn find_employee(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        self.find(id).await
    }

    async fn employee_exists(&self, id: i32) -> Result<bool, StoreError> {
        self.exists::<Employee>(id).await
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<Employee, StoreError> {
        self.insert(employee).await
    }

    async fn replace_employee(&self, employee: &Employee) -> Result<bool, StoreError> {
        self.replace(employee).await
    }

    async fn delete_employee(&self, id: i32) -> Result<bool, StoreError> {
        self.delete::<Employee>(id).await
    }
}

fn column_list<E: Entity>() -> String {
    E::COLUMNS.iter().map(|c| c.name).collect::<Vec<_>>().join(", ")
}

fn select_sql<E: Entity>() -> String {
    format!("SELECT {} FROM {}", column_list::<E>(), E::TABLE)
}

fn push_value(query: &mut QueryBuilder<'_, Postgres>, value: FieldValue) {
    match value {
        FieldValue::Int(v) => {
            query.push_bind(v);
        }
        FieldValue::Text(v) => {
            query.push_bind(v);
        }
    }
}

/// A zero key lets the database assign one; any other key is inserted as given.
fn insert_query<E: Entity>(entity: &E) -> QueryBuilder<'static, Postgres> {
    let mut columns = E::value_columns();
    let mut values = entity.field_values();
    if entity.key() != 0 {
        columns.insert(0, E::KEY);
        values.insert(0, FieldValue::Int(entity.key()));
    }

    let mut query = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        E::TABLE,
        columns.join(", ")
    ));
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            query.push(", ");
        }
        push_value(&mut query, value);
    }
    query.push(") RETURNING ");
    query.push(column_list::<E>());
    query
}

fn replace_query<E: Entity>(entity: &E) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("UPDATE {} SET ", E::TABLE));
    let assignments = E::value_columns().into_iter().zip(entity.field_values());
    for (i, (column, value)) in assignments.enumerate() {
        if i > 0 {
            query.push(", ");
        }
        query.push(column);
        query.push(" = ");
        push_value(&mut query, value);
    }
    query.push(format!(" WHERE {} = ", E::KEY));
    query.push_bind(entity.key());
    query
}

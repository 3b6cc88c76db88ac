use log::info;
use sqlx::PgPool;

use crate::errors::StoreError;
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::models::{validate_mapping, Column, Entity};

/// Fails unless every mapped column exists in the connected database.
pub async fn verify(pool: &PgPool) -> Result<(), StoreError> {
    verify_entity::<Department>(pool).await?;
    verify_entity::<Employee>(pool).await?;
    Ok(())
}

async fn verify_entity<E: Entity>(pool: &PgPool) -> Result<(), StoreError> {
    validate_mapping::<E>().map_err(StoreError::Schema)?;

    let present: Vec<String> = sqlx::query_scalar(
        "SELECT column_name::text FROM information_schema.columns \
         WHERE table_schema = current_schema() AND table_name = $1",
    )
    .bind(E::TABLE)
    .fetch_all(pool)
    .await?;

    let missing = missing_columns(E::COLUMNS, &present);
    if !missing.is_empty() {
        return Err(StoreError::Schema(format!(
            "table '{}' is missing columns: {}",
            E::TABLE,
            missing.join(", ")
        )));
    }

    info!("Verified column mapping for table '{}'", E::TABLE);
    Ok(())
}

fn missing_columns(mapped: &[Column], present: &[String]) -> Vec<&'static str> {
    mapped
        .iter()
        .map(|c| c.name)
        .filter(|name| !present.iter().any(|p| p == name))
        .collect()
}

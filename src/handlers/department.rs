use actix_web::http::header;
use actix_web::{web, HttpResponse};
use log::{debug, error, info};

use super::{missing_body, text};
use crate::db::Store;
use crate::errors::AppError;
use crate::models::department::Department;

const RETRIEVE_FAILED: &str = "Error retrieving data from the database";
const CREATE_FAILED: &str = "Error Creating Data";
const UPDATE_FAILED: &str = "Error Updating Data";
const DELETE_FAILED: &str = "Error with Deleting Data";

fn internal(message: &str) -> AppError {
    AppError::InternalServerError(message.to_string())
}

pub async fn get_departments(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    let departments = store.list_departments().await.map_err(|e| {
        error!("Database error during department listing: {:?}", e);
        internal(RETRIEVE_FAILED)
    })?;

    Ok(HttpResponse::Ok().json(departments))
}

pub async fn get_department(
    store: web::Data<dyn Store>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    match store.find_department(id).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(department)),
        Ok(None) => {
            debug!("Department {} not found", id);
            Err(AppError::not_found(id))
        }
        Err(e) => {
            error!("Database error during department retrieval: {:?}", e);
            Err(internal(RETRIEVE_FAILED))
        }
    }
}

pub async fn create_department(
    store: web::Data<dyn Store>,
    body: web::Json<Option<Department>>,
) -> Result<HttpResponse, AppError> {
    let department = body.into_inner().ok_or_else(missing_body)?;

    let created = store.insert_department(&department).await.map_err(|e| {
        error!("Database error during department creation: {:?}", e);
        internal(CREATE_FAILED)
    })?;

    info!("Created department {}", created.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/department/{}", created.id)))
        .json(created))
}

pub async fn update_department(
    store: web::Data<dyn Store>,
    id: web::Path<i32>,
    body: web::Json<Option<Department>>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let department = body.into_inner().ok_or_else(missing_body)?;

    if department.id != id {
        return Err(AppError::BadRequest("Id mismatch".to_string()));
    }

    match store.department_exists(id).await {
        Ok(true) => {}
        Ok(false) => return Err(AppError::not_found(id)),
        Err(e) => {
            error!("Database error during department existence check: {:?}", e);
            return Err(internal(UPDATE_FAILED));
        }
    }

    match store.replace_department(&department).await {
        Ok(true) => {
            info!("Updated department {}", id);
            Ok(text("Data Update Successful"))
        }
        // Removed between the existence check and the write.
        Ok(false) => Err(AppError::not_found(id)),
        Err(e) => {
            error!("Database error during department update: {:?}", e);
            Err(internal(UPDATE_FAILED))
        }
    }
}

pub async fn delete_department(
    store: web::Data<dyn Store>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    let department = match store.find_department(id).await {
        Ok(Some(department)) => department,
        Ok(None) => return Err(AppError::not_found(id)),
        Err(e) => {
            error!("Database error during department lookup: {:?}", e);
            return Err(internal(DELETE_FAILED));
        }
    };

    // Employees referencing this department are left in place.
    match store.delete_department(department.id).await {
        Ok(true) => {
            info!("Deleted department {}", department.id);
            Ok(text(format!("Data delete :{} successful", department.id)))
        }
        Ok(false) => Err(AppError::not_found(id)),
        Err(e) => {
            error!("Database error during department deletion: {:?}", e);
            Err(internal(DELETE_FAILED))
        }
    }
}

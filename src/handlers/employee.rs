use actix_web::http::header;
use actix_web::{web, HttpResponse};
use log::{debug, error, info};

use super::{missing_body, text};
use crate::db::Store;
use crate::errors::AppError;
use crate::models::employee::Employee;

const RETRIEVE_FAILED: &str = "Error retrieving data from the database";
const CREATE_FAILED: &str = "Error Creating Employee";
const UPDATE_FAILED: &str = "Error Updating Employee Data";
const DELETE_FAILED: &str = "Error with Deleting Data";

fn internal(message: &str) -> AppError {
    AppError::InternalServerError(message.to_string())
}

pub async fn get_employees(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    let employees = store.list_employees().await.map_err(|e| {
        error!("Database error during employee listing: {:?}", e);
        internal(RETRIEVE_FAILED)
    })?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    store: web::Data<dyn Store>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    match store.find_employee(id).await {
        Ok(Some(employee)) => Ok(HttpResponse::Ok().json(employee)),
        Ok(None) => {
            debug!("Employee {} not found", id);
            Err(AppError::not_found(id))
        }
        Err(e) => {
            error!("Database error during employee retrieval: {:?}", e);
            Err(internal(RETRIEVE_FAILED))
        }
    }
}

/// `departmentId` is stored as given, whether or not that department exists.
pub async fn create_employee(
    store: web::Data<dyn Store>,
    body: web::Json<Option<Employee>>,
) -> Result<HttpResponse, AppError> {
    let employee = body.into_inner().ok_or_else(missing_body)?;

    let created = store.insert_employee(&employee).await.map_err(|e| {
        error!("Database error during employee creation: {:?}", e);
        internal(CREATE_FAILED)
    })?;

    info!("Created employee {} in department {}", created.id, created.department_id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/employee/{}", created.id)))
        .json(created))
}

pub async fn update_employee(
    store: web::Data<dyn Store>,
    id: web::Path<i32>,
    body: web::Json<Option<Employee>>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let employee = body.into_inner().ok_or_else(missing_body)?;

    if employee.id != id {
        return Err(AppError::BadRequest("Id mismatch".to_string()));
    }

    match store.employee_exists(id).await {
        Ok(true) => {}
        Ok(false) => return Err(AppError::not_found(id)),
        Err(e) => {
            error!("Database error during employee existence check: {:?}", e);
            return Err(internal(UPDATE_FAILED));
        }
    }

    match store.replace_employee(&employee).await {
        Ok(true) => {
            info!("Updated employee {}", id);
            Ok(text("Employee Data Update Successful"))
        }
        Ok(false) => Err(AppError::not_found(id)),
        Err(e) => {
            error!("Database error during employee update: {:?}", e);
            Err(internal(UPDATE_FAILED))
        }
    }
}

pub async fn delete_employee(
    store: web::Data<dyn Store>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    match store.find_employee(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(AppError::not_found(id)),
        Err(e) => {
            error!("Database error during employee lookup: {:?}", e);
            return Err(internal(DELETE_FAILED));
        }
    }

    match store.delete_employee(id).await {
        Ok(true) => {
            info!("Deleted employee {}", id);
            Ok(text(format!("Data delete with id:{} successful", id)))
        }
        Ok(false) => Err(AppError::not_found(id)),
        Err(e) => {
            error!("Database error during employee deletion: {:?}", e);
            Err(internal(DELETE_FAILED))
        }
    }
}

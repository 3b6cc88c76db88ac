pub mod department;
pub mod employee;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;

/// Registers both resources plus the extractor error handlers they rely on.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|_err, req: &HttpRequest| {
        let raw = req.match_info().get("id").unwrap_or_default();
        AppError::BadRequest(format!("Invalid id: {}", raw)).into()
    }))
    .service(
        web::resource("/api/department")
            .route(web::get().to(department::get_departments))
            .route(web::post().to(department::create_department)),
    )
    .service(
        web::resource("/api/department/{id}")
            .route(web::get().to(department::get_department))
            .route(web::put().to(department::update_department))
            .route(web::delete().to(department::delete_department)),
    )
    .service(
        web::resource("/api/employee")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/api/employee/{id}")
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    );
}

fn text(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message.into())
}

fn missing_body() -> AppError {
    AppError::BadRequest("Request body is required".to_string())
}

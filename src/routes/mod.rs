//! HTTP surface of the catalogue, mounted under `/api`.
//!
//! Every handler resolves a [`ServiceResult`] into exactly one response.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::repository::DieselRepository;
use crate::services::{ServiceError, ServiceResult};

pub mod categories;
pub mod tags;

/// Body returned with every non-success response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Register the category and tag resources together with extractor error handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .service(categories::list_categories)
                .service(categories::get_category)
                .service(categories::add_category)
                .service(categories::edit_category)
                .service(categories::delete_category)
                .service(tags::list_tags)
                .service(tags::get_tag)
                .service(tags::add_tag)
                .service(tags::edit_tag)
                .service(tags::delete_tag),
        );
}

/// Run a synchronous service call on the blocking thread pool.
async fn run_blocking<F, T>(repo: web::Data<DieselRepository>, call: F) -> ServiceResult<T>
where
    F: FnOnce(&DieselRepository) -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(move || call(repo.get_ref()))
        .await
        .map_err(|err| ServiceError::Internal(err.to_string()))?
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(MessageResponse::new(message))
}

fn not_found(message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::new(message))
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(MessageResponse::new("Internal server error."))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(format!("Invalid JSON body: {err}"));
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let response = not_found(format!("No resource at {}.", req.path()));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(format!("Invalid query string: {err}"));
    InternalError::from_response(err, response).into()
}

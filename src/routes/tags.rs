use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::DieselRepository;
use crate::routes::{bad_request, internal_error, not_found, run_blocking};
use crate::services::ServiceError;
use crate::services::tags::{TagQuery, create_tag, load_tag, load_tags, modify_tag, remove_tag};

#[get("/tags")]
pub async fn list_tags(
    params: web::Query<TagQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = params.into_inner();

    match run_blocking(repo, move |repo| load_tags(repo, query)).await {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => {
            log::error!("Failed to list tags: {err}");
            internal_error()
        }
    }
}

#[get("/tags/{tag_id}")]
pub async fn get_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = path.into_inner();

    match run_blocking(repo, move |repo| load_tag(repo, tag_id)).await {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(ServiceError::NotFound) => {
            not_found(format!("The requested tag: {tag_id} does not exist."))
        }
        Err(err) => {
            log::error!("Failed to load tag {tag_id}: {err}");
            internal_error()
        }
    }
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddTagForm>,
) -> impl Responder {
    let form = form.into_inner();

    match run_blocking(repo, move |repo| create_tag(repo, form)).await {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(ServiceError::Form(message)) => bad_request(message),
        Err(err) => {
            log::error!("Failed to create tag: {err}");
            internal_error()
        }
    }
}

#[put("/tags/{tag_id}")]
pub async fn edit_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditTagForm>,
) -> impl Responder {
    let tag_id = path.into_inner();
    let form = form.into_inner();

    match run_blocking(repo, move |repo| modify_tag(repo, tag_id, form)).await {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(ServiceError::NotFound) => not_found(format!("Tag: {tag_id} does not exist.")),
        Err(ServiceError::Form(message)) => bad_request(message),
        Err(err) => {
            log::error!("Failed to modify tag {tag_id}: {err}");
            internal_error()
        }
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = path.into_inner();

    match run_blocking(repo, move |repo| remove_tag(repo, tag_id)).await {
        Ok(deleted) => HttpResponse::Ok().json(deleted),
        Err(ServiceError::NotFound) => not_found(format!("Tag: {tag_id} does not exist.")),
        Err(err) => {
            log::error!("Failed to delete tag {tag_id}: {err}");
            internal_error()
        }
    }
}

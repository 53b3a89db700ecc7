use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::{bad_request, internal_error, not_found, run_blocking};
use crate::services::ServiceError;
use crate::services::categories::{
    CategoryQuery, create_category, load_categories, load_category, modify_category,
    remove_category,
};

#[get("/categories")]
pub async fn list_categories(
    params: web::Query<CategoryQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = params.into_inner();

    match run_blocking(repo, move |repo| load_categories(repo, query)).await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            internal_error()
        }
    }
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match run_blocking(repo, move |repo| load_category(repo, category_id)).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(ServiceError::NotFound) => {
            not_found(format!("Requested category: {category_id} was not found."))
        }
        Err(err) => {
            log::error!("Failed to load category {category_id}: {err}");
            internal_error()
        }
    }
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCategoryForm>,
) -> impl Responder {
    let form = form.into_inner();

    match run_blocking(repo, move |repo| create_category(repo, form)).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(ServiceError::Form(message)) => bad_request(message),
        Err(err) => {
            log::error!("Failed to create category: {err}");
            internal_error()
        }
    }
}

#[put("/categories/{category_id}")]
pub async fn edit_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditCategoryForm>,
) -> impl Responder {
    let category_id = path.into_inner();
    let form = form.into_inner();

    match run_blocking(repo, move |repo| modify_category(repo, category_id, form)).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(ServiceError::NotFound) => not_found(format!("Category: {category_id} not found.")),
        Err(ServiceError::Form(message)) => bad_request(message),
        Err(err) => {
            log::error!("Failed to update category {category_id}: {err}");
            internal_error()
        }
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match run_blocking(repo, move |repo| remove_category(repo, category_id)).await {
        Ok(deleted) => HttpResponse::Ok().json(deleted),
        Err(ServiceError::NotFound) => not_found(format!("Category: {category_id} not found.")),
        Err(err) => {
            log::error!("Failed to delete category {category_id}: {err}");
            internal_error()
        }
    }
}

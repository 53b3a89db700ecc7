use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use shop_catalog::domain::product::NewProduct;
use shop_catalog::domain::product_tag::NewProductTag;
use shop_catalog::repository::{DieselRepository, ProductWriter};
use shop_catalog::routes::{self, MessageResponse};

mod common;

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn category_list_is_empty_array_not_404() {
    let test_db = common::TestDb::new("api_category_list_empty.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn category_crud_round_trip() {
    let test_db = common::TestDb::new("api_category_crud.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "category_name": "Shirts" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["category_name"], "Shirts");
    assert_eq!(created["products"], json!([]));
    let id = created["id"].as_i64().expect("numeric id");

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "category_name": "Hats" }))
        .to_request();
    let other: Value = test::call_and_read_body_json(&app, req).await;
    assert_ne!(other["id"].as_i64(), Some(id));

    repo.create_product(&NewProduct::new("Plain T-Shirt", 1499).with_category_id(id as i32))
        .expect("create product");

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{id}"))
        .set_json(json!({ "category_name": "Tops" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["category_name"], "Tops");

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["category_name"], "Tops");
    assert_eq!(fetched["products"][0]["product_name"], "Plain T-Shirt");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: Value = test::read_body_json(resp).await;
    assert_eq!(deleted, json!(1));

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(
        body.message,
        format!("Requested category: {id} was not found.")
    );
}

#[actix_web::test]
async fn category_missing_ids_return_404() {
    let test_db = common::TestDb::new("api_category_missing.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/categories/41").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/categories/41")
        .set_json(json!({ "category_name": "Ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Category: 41 not found.");

    let req = test::TestRequest::delete()
        .uri("/api/categories/41")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/categories/not-a-number")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn category_invalid_payloads_return_400() {
    let test_db = common::TestDb::new("api_category_invalid.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "category_name is required");

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"category_name\":")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "category_name": "Shoes" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().expect("numeric id");

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{id}"))
        .set_json(json!({ "category_name": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["category_name"], "Shoes");
}

#[actix_web::test]
async fn tag_crud_includes_linked_products() {
    let test_db = common::TestDb::new("api_tag_crud.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/tags").to_request();
    let tags: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(tags, json!([]));

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({ "tag_name": "rock music" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["tag_name"], "rock music");
    let id = created["id"].as_i64().expect("numeric id") as i32;

    let record = repo
        .create_product(&NewProduct::new("Vinyl Record", 1299))
        .expect("create product");
    repo.tag_product(NewProductTag::new(record.id, id))
        .expect("link product");

    let req = test::TestRequest::get()
        .uri(&format!("/api/tags/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["products"][0]["product_name"], "Vinyl Record");

    let req = test::TestRequest::put()
        .uri(&format!("/api/tags/{id}"))
        .set_json(json!({ "tag_name": "classic rock", "ignored": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["tag_name"], "classic rock");
    assert_eq!(updated["products"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get()
        .uri("/api/tags?search=classic")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/tags/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tags/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(
        body.message,
        format!("The requested tag: {id} does not exist.")
    );
}

#[actix_web::test]
async fn tag_update_and_delete_of_missing_id_return_404() {
    let test_db = common::TestDb::new("api_tag_missing.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::put()
        .uri("/api/tags/12")
        .set_json(json!({ "tag_name": "green" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Tag: 12 does not exist.");

    let req = test::TestRequest::delete().uri("/api/tags/12").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Tag: 12 does not exist.");

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({ "tag_name": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn category_name_length_is_checked_after_sanitizing() {
    let test_db = common::TestDb::new("api_category_padded_name.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "category_name": format!("Hats{}", " ".repeat(300)) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["category_name"], "Hats");

    let long_name = "z".repeat(256);
    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "category_name": long_name }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "category_name must be at most 255 characters");
    assert!(!body.message.contains(&long_name));
}

#[actix_web::test]
async fn malformed_query_string_returns_json_400() {
    let test_db = common::TestDb::new("api_bad_query.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    for uri in ["/api/categories?search=a&search=b", "/api/tags?search=a&search=b"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: MessageResponse = test::read_body_json(resp).await;
        assert!(body.message.starts_with("Invalid query string"));
    }
}

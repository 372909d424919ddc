use actix_web::{delete, patch, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::modules::content::application::domain::entities::ReviewDraft;
use crate::modules::content::application::domain::patch::{PatchField, ReviewPatch};
use crate::modules::content::application::ports::incoming::ContentStore;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{created_record, require_text, store_error, updated_record, validate_rating};

#[post("/api/admin/reviews")]
pub async fn create_review_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<ReviewDraft>,
) -> impl Responder {
    let draft = body.into_inner();
    if let Err(resp) = require_text(&draft.client_name, "INVALID_CLIENT_NAME", "Client name") {
        return resp;
    }
    if let Err(resp) = validate_rating(draft.rating) {
        return resp;
    }

    match data.content.add_review(draft).await {
        Ok(id) => {
            let record = data.content.snapshot().await.review(&id).cloned();
            created_record(record, id)
        }
        Err(e) => store_error("create review", e),
    }
}

#[patch("/api/admin/reviews/{id}")]
pub async fn patch_review_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ReviewPatch>,
) -> impl Responder {
    let id = path.into_inner();
    let patch = body.into_inner();

    if let PatchField::Value(rating) = patch.rating {
        if let Err(resp) = validate_rating(rating) {
            return resp;
        }
    }
    if let PatchField::Value(name) = &patch.client_name {
        if let Err(resp) = require_text(name, "INVALID_CLIENT_NAME", "Client name") {
            return resp;
        }
    }

    if let Err(e) = data.content.update_review(&id, patch).await {
        return store_error("update review", e);
    }

    let record = data.content.snapshot().await.review(&id).cloned();
    updated_record(record, "REVIEW_NOT_FOUND", "Review not found")
}

#[delete("/api/admin/reviews/{id}")]
pub async fn delete_review_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.content.delete_review(&path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => store_error("delete review", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_verifier_data};
    use crate::tests::support::content_fixtures::sample_review_draft;

    #[actix_web::test]
    async fn test_create_review_defaults_rating_to_five() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_verifier_data())
                .service(create_review_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/reviews")
            .insert_header(bearer())
            .set_json(json!({
                "clientName": "Priya Nair",
                "company": "Lumen",
                "reviewText": "Thoughtful and fast."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["rating"], 5);
        assert!(body["data"]["image"].is_null());
    }

    #[actix_web::test]
    async fn test_rating_out_of_range_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_verifier_data())
                .service(create_review_handler)
                .service(patch_review_handler),
        )
        .await;

        let draft = sample_review_draft(6);
        let req = test::TestRequest::post()
            .uri("/api/admin/reviews")
            .insert_header(bearer())
            .set_json(json!({
                "clientName": draft.client_name,
                "reviewText": draft.review_text,
                "rating": draft.rating
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::patch()
            .uri("/api/admin/reviews/1")
            .insert_header(bearer())
            .set_json(json!({ "rating": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_RATING");
    }

    #[actix_web::test]
    async fn test_patch_review_clears_image_and_delete() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(token_verifier_data())
                .service(patch_review_handler)
                .service(delete_review_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/admin/reviews/2")
            .insert_header(bearer())
            .set_json(json!({ "image": null, "rating": 4 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let snapshot = state.content.snapshot().await;
        let review = snapshot.review("2").unwrap();
        assert!(review.image.is_none());
        assert_eq!(review.rating, 4);

        let req = test::TestRequest::delete()
            .uri("/api/admin/reviews/2")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.content.snapshot().await.reviews.len(), 2);
    }
}

use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::admin::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/contact-messages")]
pub async fn list_contact_messages_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list.execute().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(e) => {
            error!("Failed to list contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageCommand;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_verifier_data};

    #[actix_web::test]
    async fn test_list_contact_messages_requires_admin() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_verifier_data())
                .service(list_contact_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/contact-messages")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_list_contact_messages_returns_inbox() {
        let app_state = TestAppStateBuilder::default().build();
        app_state
            .contact
            .submit
            .execute(
                SubmitContactMessageCommand::new(
                    "Ada".to_string(),
                    "ada@example.com".to_string(),
                    Some("SEO".to_string()),
                    "Hello".to_string(),
                )
                .unwrap(),
            )
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_verifier_data())
                .service(list_contact_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/contact-messages")
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["projectType"], "SEO");
    }
}

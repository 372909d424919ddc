use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PayloadConfig};

/// Malformed JSON bodies answer with the standard error envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::debug!("Rejected JSON body: {}", message);
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_BODY", &message),
        )
        .into()
    })
}

/// Raw upload bodies may be as large as the upload policy allows.
pub fn upload_payload_config(max_bytes: u64) -> PayloadConfig {
    PayloadConfig::new(usize::try_from(max_bytes).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, post, test, web, App, Responder};
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    struct Body {
        #[allow(dead_code)]
        name: String,
    }

    #[post("/echo")]
    async fn echo(_body: web::Json<Body>) -> impl Responder {
        ApiResponse::no_content()
    }

    #[actix_web::test]
    async fn test_malformed_json_uses_error_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(echo),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"name\": 42}")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }
}

use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_verifier::{TokenError, TokenVerifier};
use crate::shared::api::ApiResponse;

pub const ADMIN_ROLE: &str = "authenticated";

/// A caller holding a valid admin access token.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier + Send + Sync>>>() {
            Some(verifier) => verifier,
            None => {
                tracing::error!("Token verifier is not registered");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match verifier.verify_token(&token) {
            Ok(claims) => {
                if claims.role != ADMIN_ROLE {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "FORBIDDEN",
                        "Admin access required",
                    ))));
                }

                ready(Ok(AdminUser {
                    user_id: claims.sub,
                    email: claims.email,
                }))
            }
            Err(TokenError::TokenExpired) => ready(Err(create_api_error(
                ApiResponse::unauthorized("TOKEN_EXPIRED", "Token has expired"),
            ))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, Responder};
    use chrono::Utc;
    use serde_json::{json, Value};

    use crate::tests::support::auth_helper::{admin_token, sign_claims, token_verifier_data};

    #[get("/whoami")]
    async fn whoami(admin: AdminUser) -> impl Responder {
        ApiResponse::success(admin.user_id.to_string())
    }

    async fn call(header: Option<String>) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(token_verifier_data())
                .service(whoami),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/whoami");
        if let Some(h) = header {
            req = req.insert_header(("Authorization", h));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_valid_admin_token_is_accepted() {
        let (status, body) = call(Some(format!("Bearer {}", admin_token()))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let (status, body) = call(None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_non_bearer_header_is_unauthorized() {
        let (status, _) = call(Some(format!("Basic {}", admin_token()))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_wrong_role_is_forbidden() {
        let token = sign_claims(json!({
            "sub": Uuid::new_v4(),
            "aud": "authenticated",
            "role": "anon",
            "exp": Utc::now().timestamp() + 600,
        }));

        let (status, body) = call(Some(format!("Bearer {}", token))).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }

    #[actix_web::test]
    async fn test_expired_token_is_reported() {
        let token = sign_claims(json!({
            "sub": Uuid::new_v4(),
            "aud": "authenticated",
            "role": "authenticated",
            "exp": Utc::now().timestamp() - 3600,
        }));

        let (status, body) = call(Some(format!("Bearer {}", token))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "TOKEN_EXPIRED");
    }
}

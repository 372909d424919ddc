use actix_web::web;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_verifier::TokenVerifier;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// HS256-signs arbitrary claims with [`TEST_JWT_SECRET`].
pub fn sign_claims(claims: serde_json::Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("test claims should encode")
}

/// A valid admin token for a fresh user id, expiring in ten minutes.
pub fn admin_token() -> String {
    sign_claims(json!({
        "sub": Uuid::new_v4(),
        "aud": JwtConfig::DEFAULT_AUDIENCE,
        "role": "authenticated",
        "email": "admin@example.com",
        "iat": Utc::now().timestamp(),
        "exp": Utc::now().timestamp() + 600,
    }))
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", admin_token()))
}

pub fn token_verifier_data() -> web::Data<Arc<dyn TokenVerifier + Send + Sync>> {
    let service = JwtTokenService::new(JwtConfig::new(
        TEST_JWT_SECRET.to_string(),
        JwtConfig::DEFAULT_AUDIENCE.to_string(),
    ));
    let verifier: Arc<dyn TokenVerifier + Send + Sync> = Arc::new(service);
    web::Data::new(verifier)
}

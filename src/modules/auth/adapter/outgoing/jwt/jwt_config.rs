#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Clock skew tolerance in seconds.
    pub leeway: u64,
}

impl JwtConfig {
    pub const DEFAULT_AUDIENCE: &'static str = "authenticated";
    pub const MIN_SECRET_LEN: usize = 32;

    pub fn new(secret_key: String, audience: String) -> Self {
        Self {
            secret_key,
            audience,
            leeway: 30,
        }
    }
}

// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Default endpoint publishing the identity provider's token-signing keys
/// (Firebase secure-token JWK set).
pub const DEFAULT_IDP_CERTS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Identity-provider project id; doubles as the expected token audience.
    pub idp_project_id: String,
    /// Where to fetch the provider's token-signing certificates.
    pub idp_certs_url: String,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment. Missing required
    /// variables are a fatal startup error.
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let idp_project_id = env::var("IDP_PROJECT_ID").expect("IDP_PROJECT_ID must be set");

        let idp_certs_url =
            env::var("IDP_CERTS_URL").unwrap_or_else(|_| DEFAULT_IDP_CERTS_URL.to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            idp_project_id,
            idp_certs_url,
            rust_log,
            port,
        }
    }
}

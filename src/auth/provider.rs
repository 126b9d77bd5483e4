// src/auth/provider.rs

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::auth::VerifiedIdentity;
use crate::error::AppError;

/// How long fetched provider keys are reused before a refresh.
const KEY_TTL: Duration = Duration::from_secs(3600);

/// External identity-provider client. A trait object lives in `AppState`
/// so tests can substitute a stub.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AppError>;
}

/// Claims we care about from the provider's ID token. Expiry is checked by
/// the decoder itself.
#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    email: Option<String>,
}

/// One RSA public key as published by the provider's JWK endpoint.
#[derive(Debug, Clone, Deserialize)]
struct ProviderKey {
    kid: String,
    n: String,
    e: String,
}

#[derive(Debug, Deserialize)]
struct ProviderKeySet {
    keys: Vec<ProviderKey>,
}

struct CachedKeys {
    keys: HashMap<String, ProviderKey>,
    fetched_at: Instant,
}

/// Verifies Firebase-style RS256 ID tokens against the provider's published
/// signing keys, checking issuer and audience for the configured project.
pub struct IdTokenVerifier {
    project_id: String,
    certs_url: String,
    http: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
}

impl IdTokenVerifier {
    pub fn new(project_id: String, certs_url: String) -> Self {
        Self {
            project_id,
            certs_url,
            http: reqwest::Client::new(),
            cache: RwLock::new(None),
        }
    }

    /// Returns the signing key for `kid`, refreshing the cached key set
    /// when it is stale or does not contain the kid.
    async fn signing_key(&self, kid: &str) -> Result<ProviderKey, AppError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref()
                && cached.fetched_at.elapsed() < KEY_TTL
                && let Some(key) = cached.keys.get(kid)
            {
                return Ok(key.clone());
            }
        }

        let key_set: ProviderKeySet = self
            .http
            .get(&self.certs_url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch provider keys: {:?}", e);
                AppError::InternalServerError(e.to_string())
            })?
            .json()
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse provider keys: {:?}", e);
                AppError::InternalServerError(e.to_string())
            })?;

        let keys: HashMap<String, ProviderKey> = key_set
            .keys
            .into_iter()
            .map(|k| (k.kid.clone(), k))
            .collect();

        let key = keys.get(kid).cloned();

        *self.cache.write().await = Some(CachedKeys {
            keys,
            fetched_at: Instant::now(),
        });

        key.ok_or_else(|| AppError::AuthError("Unknown token signing key".to_string()))
    }
}

#[async_trait]
impl TokenVerifier for IdTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AppError> {
        let header = decode_header(token)
            .map_err(|_| AppError::AuthError("Invalid token".to_string()))?;

        let kid = header
            .kid
            .ok_or_else(|| AppError::AuthError("Invalid token".to_string()))?;

        let key = self.signing_key(&kid).await?;

        let decoding_key = DecodingKey::from_rsa_components(&key.n, &key.e)
            .map_err(|_| AppError::AuthError("Invalid token".to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[format!(
            "https://securetoken.google.com/{}",
            self.project_id
        )]);

        let token_data = decode::<IdTokenClaims>(token, &decoding_key, &validation)
            .map_err(|_| AppError::AuthError("Invalid or expired token".to_string()))?;

        let claims = token_data.claims;

        if claims.sub.is_empty() {
            return Err(AppError::AuthError(
                "Could not retrieve subject from token".to_string(),
            ));
        }

        let email = claims
            .email
            .ok_or_else(|| AppError::AuthError("Token has no email claim".to_string()))?;

        Ok(VerifiedIdentity {
            subject: claims.sub,
            email,
        })
    }
}

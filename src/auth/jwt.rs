use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::{claims::Claims, Principal},
    config::MIN_JWT_SECRET_LEN,
    errors::{AppError, AppResult},
};

/// Issues and checks HS256 bearer tokens. Stateless; no revocation.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration: Duration,
}

impl JwtService {
    /// Fails when the secret is below the HS256 minimum key size. Callers
    /// construct this once at startup and treat the error as fatal.
    pub fn new(secret: &SecretString, expiration: Duration) -> AppResult<Self> {
        let secret_bytes = secret.expose_secret().as_bytes();

        if secret_bytes.len() < MIN_JWT_SECRET_LEN {
            return Err(AppError::Configuration(format!(
                "JWT secret must be at least {} bytes, got {}",
                MIN_JWT_SECRET_LEN,
                secret_bytes.len()
            )));
        }

        // Expiry is compared explicitly in `is_valid`, without leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            expiration,
        })
    }

    pub fn from_millis(secret: &SecretString, expiration_ms: i64) -> AppResult<Self> {
        Self::new(secret, Duration::milliseconds(expiration_ms))
    }

    pub fn issue(&self, principal: &Principal) -> AppResult<String> {
        let claims = Claims::new(principal, self.expiration);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    /// Verifies the signature and structure and returns the subject. Does not check expiry.
    pub fn extract_subject(&self, token: &str) -> AppResult<String> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    /// True iff the token verifies, names `expected_subject`, and has not expired.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        match self.decode_claims(token) {
            Ok(claims) => claims.sub == expected_subject && !claims.is_expired(),
            Err(_) => false,
        }
    }

    fn decode_claims(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::Unauthorized("Token signature is invalid".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::Unauthorized("Invalid token format".to_string())
                }
                _ => AppError::Unauthorized(format!("Invalid token: {}", e)),
            })
    }
}

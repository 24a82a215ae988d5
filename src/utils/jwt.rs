use crate::config::AppConfig;
use crate::models::auth::entities::UserType;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

// JWT claims carried by every token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // subject (account ID)
    pub user_type: String,  // "student", "tutor" or "admin"
    pub token_type: String, // "access" or "refresh"
    pub fresh: bool,        // true only on tokens minted from a password login
    pub jti: String,        // unique token id, referenced by the blocklist
    pub exp: usize,         // expiration timestamp
    pub iat: usize,         // issued-at timestamp
}

impl Claims {
    pub fn uid(&self) -> Option<i64> {
        self.sub.parse::<i64>().ok()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    pub fn generate_access_token(
        uid: i64,
        user_type: UserType,
        fresh: bool,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            uid,
            user_type,
            "access",
            fresh,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    pub fn generate_refresh_token(
        uid: i64,
        user_type: UserType,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            uid,
            user_type,
            "refresh",
            false,
            chrono::Duration::days(config.jwt.refresh_token_expiry),
        )
    }

    pub fn generate_token_with_expiry(
        uid: i64,
        user_type: UserType,
        token_type: &str,
        fresh: bool,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: uid.to_string(),
            user_type: user_type.to_string(),
            token_type: token_type.to_string(),
            fresh,
            jti: uuid::Uuid::new_v4().to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    /// Generate an access + refresh pair. `fresh` marks the access token as
    /// minted directly from a password login.
    pub fn generate_token_pair(
        uid: i64,
        user_type: UserType,
        fresh: bool,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let access_token = Self::generate_access_token(uid, user_type, fresh)?;
        let refresh_token = Self::generate_refresh_token(uid, user_type)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    pub fn verify_token_type(
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = Self::verify_token(token)?;
        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, "access")
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, "refresh")
    }

    /// Build the access token session cookie.
    pub fn create_access_token_cookie(access_token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(ACCESS_TOKEN_COOKIE, access_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::minutes(
                config.jwt.access_token_expiry,
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// Build the refresh token cookie.
    pub fn create_refresh_token_cookie(refresh_token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(REFRESH_TOKEN_COOKIE, refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(
                config.jwt.refresh_token_expiry,
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// Expired cookie used to log a session out.
    pub fn create_empty_cookie(name: &'static str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(name, "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    pub fn extract_access_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }

    /// Access token from the Authorization header, falling back to the
    /// session cookie. Both locations are accepted everywhere.
    pub fn extract_access_token(req: &actix_web::HttpRequest) -> Option<String> {
        req.headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.to_string())
            .or_else(|| Self::extract_access_token_from_cookie(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_uid_parsing() {
        let claims = Claims {
            sub: "42".to_string(),
            user_type: "student".to_string(),
            token_type: "access".to_string(),
            fresh: true,
            jti: "abc".to_string(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.uid(), Some(42));

        let bad = Claims {
            sub: "not-a-number".to_string(),
            ..claims
        };
        assert_eq!(bad.uid(), None);
    }

    #[test]
    fn test_claims_serde_roundtrip() {
        let claims = Claims {
            sub: "1".to_string(),
            user_type: "tutor".to_string(),
            token_type: "refresh".to_string(),
            fresh: false,
            jti: "jti-1".to_string(),
            exp: 2_000_000_000,
            iat: 1_000_000_000,
        };
        let json = serde_json::to_string(&claims).unwrap();
        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sub, "1");
        assert_eq!(back.user_type, "tutor");
        assert_eq!(back.token_type, "refresh");
        assert!(!back.fresh);
        assert_eq!(back.jti, "jti-1");
    }
}

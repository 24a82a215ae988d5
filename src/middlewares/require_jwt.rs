/*!
 * JWT authentication middleware.
 *
 * Validates the access token on every request passing through it and stores
 * the resulting [`AuthSession`] in the request extensions.
 *
 * Tokens are accepted from two locations:
 * 1. `Authorization: Bearer <token>` header (API clients)
 * 2. the `access_token` cookie (browser sessions set by the HTML front end)
 *
 * A token whose `jti` appears in the revocation blocklist is rejected even
 * when its signature is still valid; logout and refresh rotation put entries
 * there.
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::models::auth::entities::AuthSession;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, str::FromStr, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

pub const REVOKED_KEY_PREFIX: &str = "revoked:";

#[derive(Clone)]
pub struct RequireJWT;

/// Check the revocation blocklist for a jti.
pub async fn is_token_revoked(cache: &Arc<dyn ObjectCache>, jti: &str) -> bool {
    matches!(
        cache.get_raw(&format!("{REVOKED_KEY_PREFIX}{jti}")).await,
        CacheResult::Found(_)
    )
}

/// Put a jti on the blocklist until the token would have expired anyway.
pub async fn revoke_token(cache: &Arc<dyn ObjectCache>, jti: &str, exp: usize) {
    let now = chrono::Utc::now().timestamp();
    let ttl = (exp as i64 - now).max(1) as u64;
    cache
        .insert_raw(
            format!("{REVOKED_KEY_PREFIX}{jti}"),
            "1".to_string(),
            ttl,
        )
        .await;
}

// Helper: extract and validate the access token into a session
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<AuthSession, String> {
    let token = JwtUtils::extract_access_token(req.request())
        .ok_or_else(|| "Missing access token".to_string())?;

    let claims = JwtUtils::verify_access_token(&token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    if is_token_revoked(&cache, &claims.jti).await {
        info!("Rejected revoked token (jti: {})", claims.jti);
        return Err("Token has been revoked".to_string());
    }

    let uid = claims
        .uid()
        .ok_or_else(|| "Invalid user ID in JWT".to_string())?;
    let user_type = crate::models::auth::entities::UserType::from_str(&claims.user_type)
        .map_err(|_| "Invalid user type in JWT".to_string())?;

    Ok(AuthSession {
        uid,
        user_type,
        fresh: claims.fresh,
        jti: claims.jti,
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // CORS preflight passes straight through
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(session) => {
                    debug!(
                        "JWT authentication successful for {} {}",
                        session.user_type, session.uid
                    );
                    req.extensions_mut().insert(session);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// Session stored by this middleware (or by RefreshSession on HTML
    /// routes); None when the request is unauthenticated.
    pub fn extract_session(req: &actix_web::HttpRequest) -> Option<AuthSession> {
        req.extensions().get::<AuthSession>().cloned()
    }

    pub fn extract_uid(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<AuthSession>().map(|s| s.uid)
    }
}

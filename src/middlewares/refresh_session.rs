/*!
 * Session resolution for the HTML routes.
 *
 * Unlike [`RequireJWT`](super::require_jwt::RequireJWT) this middleware
 * never rejects a request: pages render differently for anonymous visitors,
 * so the handlers decide what an absent session means.
 *
 * It also carries the token-refresh lifecycle hook: when the access cookie
 * is missing or expired but the refresh cookie is still valid and not
 * revoked, a new non-fresh access token is minted, stored as the session for
 * this request, and set as a cookie on the response.
 */

use crate::cache::ObjectCache;
use crate::models::auth::entities::{AuthSession, UserType};
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, str::FromStr, sync::Arc};
use tracing::{debug, info};

use super::require_jwt::is_token_revoked;

#[derive(Clone)]
pub struct RefreshSession;

enum Resolved {
    /// Session from a valid access cookie or header.
    Valid(AuthSession),
    /// Session minted from the refresh cookie; the new access token must be
    /// set on the response.
    Refreshed(AuthSession, String),
    Anonymous,
}

async fn resolve_session(req: &ServiceRequest) -> Resolved {
    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // happy path: the access token is still good
    if let Some(token) = JwtUtils::extract_access_token(req.request())
        && let Ok(claims) = JwtUtils::verify_access_token(&token)
        && !is_token_revoked(&cache, &claims.jti).await
        && let (Some(uid), Ok(user_type)) =
            (claims.uid(), UserType::from_str(&claims.user_type))
    {
        return Resolved::Valid(AuthSession {
            uid,
            user_type,
            fresh: claims.fresh,
            jti: claims.jti,
        });
    }

    // lifecycle hook: fall back to the refresh cookie
    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(req.request()) else {
        return Resolved::Anonymous;
    };

    let Ok(claims) = JwtUtils::verify_refresh_token(&refresh_token) else {
        return Resolved::Anonymous;
    };

    if is_token_revoked(&cache, &claims.jti).await {
        info!("Refresh cookie is revoked (jti: {})", claims.jti);
        return Resolved::Anonymous;
    }

    let (Some(uid), Ok(user_type)) = (claims.uid(), UserType::from_str(&claims.user_type)) else {
        return Resolved::Anonymous;
    };

    match JwtUtils::generate_access_token(uid, user_type, false) {
        Ok(new_access) => match JwtUtils::verify_access_token(&new_access) {
            Ok(new_claims) => {
                debug!("Refreshed access token for {} {}", user_type, uid);
                Resolved::Refreshed(
                    AuthSession {
                        uid,
                        user_type,
                        fresh: false,
                        jti: new_claims.jti,
                    },
                    new_access,
                )
            }
            Err(e) => {
                info!("Failed to decode freshly minted access token: {}", e);
                Resolved::Anonymous
            }
        },
        Err(e) => {
            info!("Failed to mint refreshed access token: {}", e);
            Resolved::Anonymous
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RefreshSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RefreshSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RefreshSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RefreshSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RefreshSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
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
            let mut refreshed_token = None;

            match resolve_session(&req).await {
                Resolved::Valid(session) => {
                    req.extensions_mut().insert(session);
                }
                Resolved::Refreshed(session, token) => {
                    req.extensions_mut().insert(session);
                    refreshed_token = Some(token);
                }
                Resolved::Anonymous => {}
            }

            let mut res = srv.call(req).await?;

            if let Some(token) = refreshed_token {
                let cookie = JwtUtils::create_access_token_cookie(&token);
                if let Err(e) = res.response_mut().add_cookie(&cookie) {
                    info!("Failed to set refreshed access cookie: {}", e);
                }
            }

            Ok(res)
        })
    }
}

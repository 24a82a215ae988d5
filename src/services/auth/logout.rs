use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::revoke_token;
use crate::models::ApiResponse;
use crate::utils::jwt::{self, JwtUtils};

use super::AuthService;

/// Revoke whatever session tokens the request carries and clear the
/// cookies. Both the access and the refresh jti go on the blocklist so a
/// captured token cannot outlive the logout.
pub async fn handle_logout(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request);

    if let Some(token) = JwtUtils::extract_access_token(request)
        && let Ok(claims) = JwtUtils::verify_access_token(&token)
    {
        revoke_token(&cache, &claims.jti, claims.exp).await;
        tracing::info!(
            "Revoked access token for {} {}",
            claims.user_type,
            claims.sub
        );
    }

    if let Some(token) = JwtUtils::extract_refresh_token_from_cookie(request)
        && let Ok(claims) = JwtUtils::verify_refresh_token(&token)
    {
        revoke_token(&cache, &claims.jti, claims.exp).await;
    }

    Ok(HttpResponse::Ok()
        .cookie(JwtUtils::create_empty_cookie(jwt::ACCESS_TOKEN_COOKIE))
        .cookie(JwtUtils::create_empty_cookie(jwt::REFRESH_TOKEN_COOKIE))
        .json(ApiResponse::success_empty("Successfully logged out")))
}

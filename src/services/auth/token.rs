use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::{is_token_revoked, revoke_token};
use crate::models::auth::UserType;
use crate::models::auth::responses::RefreshTokenResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::{self, JwtUtils};

use super::AuthService;

// Refresh token from the cookie, falling back to the Authorization header
fn extract_refresh_token(request: &HttpRequest) -> Option<String> {
    jwt::JwtUtils::extract_refresh_token_from_cookie(request).or_else(|| {
        request
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.to_string())
    })
}

fn unauthorized_with_cleared_cookies(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized()
        .cookie(JwtUtils::create_empty_cookie(jwt::ACCESS_TOKEN_COOKIE))
        .cookie(JwtUtils::create_empty_cookie(jwt::REFRESH_TOKEN_COOKIE))
        .json(ApiResponse::error_empty(ErrorCode::Unauthorized, message))
}

/// Rotate the session: consume the refresh token, revoke its jti and issue a
/// fresh pair. The new access token is no longer marked fresh.
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let Some(refresh_token) = extract_refresh_token(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let claims = match JwtUtils::verify_refresh_token(&refresh_token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::error!("Refresh token failed: {}", e);
            return Ok(unauthorized_with_cleared_cookies(
                "Login expired or invalid, please login again",
            ));
        }
    };

    let cache = service.get_cache(request);
    if is_token_revoked(&cache, &claims.jti).await {
        return Ok(unauthorized_with_cleared_cookies(
            "Login expired or invalid, please login again",
        ));
    }

    let (Some(uid), Ok(user_type)) = (
        claims.uid(),
        claims.user_type.parse::<UserType>(),
    ) else {
        return Ok(unauthorized_with_cleared_cookies(
            "Login expired or invalid, please login again",
        ));
    };

    match JwtUtils::generate_token_pair(uid, user_type, false) {
        Ok(token_pair) => {
            // single use: the consumed refresh token goes on the blocklist
            revoke_token(&cache, &claims.jti, claims.exp).await;

            let response = RefreshTokenResponse {
                access_token: token_pair.access_token.clone(),
                expires_in: config.jwt.access_token_expiry * 60,
            };

            Ok(HttpResponse::Ok()
                .cookie(JwtUtils::create_access_token_cookie(
                    &token_pair.access_token,
                ))
                .cookie(JwtUtils::create_refresh_token_cookie(
                    &token_pair.refresh_token,
                ))
                .json(ApiResponse::success(
                    response,
                    "Token refreshed successfully",
                )))
        }
        Err(e) => {
            tracing::error!("Failed to generate rotated token pair: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Token refresh failed",
                )),
            )
        }
    }
}

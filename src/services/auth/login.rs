use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse, UserType},
};
use crate::utils::jwt::{JwtUtils, TokenPair};
use crate::utils::password::verify_password;

use super::AuthService;

/// Issue the token pair for an authenticated account and build the login
/// response with both session cookies set.
pub(crate) fn issue_session(
    service: &AuthService,
    uid: i64,
    user_type: UserType,
) -> Result<(TokenPair, HttpResponse), HttpResponse> {
    let config = service.get_config();

    match JwtUtils::generate_token_pair(uid, user_type, true) {
        Ok(token_pair) => {
            let response = LoginResponse {
                access_token: token_pair.access_token.clone(),
                refresh_token: token_pair.refresh_token.clone(),
                expires_in: config.jwt.access_token_expiry * 60,
                uid,
                user_type,
            };

            let access_cookie = JwtUtils::create_access_token_cookie(&token_pair.access_token);
            let refresh_cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            let http_response = HttpResponse::Ok()
                .cookie(access_cookie)
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful"));

            Ok((token_pair, http_response))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token pair: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}

pub async fn handle_login(
    service: &AuthService,
    user_type: UserType,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. look the account up in the table matching the user type
    let account = match user_type {
        UserType::Student => storage
            .get_student_by_username(&login_request.username)
            .await
            .map(|s| s.map(|s| (s.id, s.password_hash, s.username))),
        UserType::Tutor => storage
            .get_tutor_by_username(&login_request.username)
            .await
            .map(|t| t.map(|t| (t.id, t.password_hash, t.username))),
        UserType::Admin => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Invalid credentials",
            )));
        }
    };

    match account {
        Ok(Some((uid, password_hash, username))) => {
            // 2. verify the password
            if verify_password(&login_request.password, &password_hash) {
                // 3. mint the session
                match issue_session(service, uid, user_type) {
                    Ok((_, response)) => {
                        tracing::info!("{} {} logged in successfully", user_type, username);
                        Ok(response)
                    }
                    Err(response) => Ok(response),
                }
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Invalid credentials",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Invalid credentials",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}

pub async fn handle_admin_login(
    service: &AuthService,
    login_request: LoginRequest,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    // The operator account has no database row; uid 0 by convention.
    let credentials_ok = !config.auth.admin_password.is_empty()
        && login_request.username == config.auth.admin_username
        && login_request.password == config.auth.admin_password;

    if credentials_ok {
        match issue_session(service, 0, UserType::Admin) {
            Ok((_, response)) => {
                tracing::info!("Admin logged in successfully");
                Ok(response)
            }
            Err(response) => Ok(response),
        }
    } else {
        Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Invalid credentials",
        )))
    }
}

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::PageService;
use super::home::resolve_account;
use super::templates::{
    LoginFormTemplate, RegisterFormTemplate, UserInfoTemplate, redirect, render,
};
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::middlewares::require_jwt::revoke_token;
use crate::models::auth::UserType;
use crate::models::auth::requests::{AccountUpdateForm, LoginForm};
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::models::tutors::requests::{CreateTutorRequest, UpdateTutorRequest};
use crate::services::files::upload::{
    PictureError, collect_multipart, persist_profile_picture,
};
use crate::utils::jwt::{self, JwtUtils};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::{
    validate_age, validate_email, validate_password_simple, validate_username,
};

/// GET /login: the form, or straight to the homepage for live sessions.
pub async fn login_page(_service: &PageService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    if RequireJWT::extract_session(request).is_some() {
        return Ok(redirect("/homepage"));
    }
    Ok(render(&LoginFormTemplate { error: None }))
}

/// POST /handle_login: form login that establishes the cookie session.
pub async fn handle_login(
    service: &PageService,
    form: LoginForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let account = match form.user_type {
        UserType::Student => storage
            .get_student_by_username(&form.username)
            .await
            .map(|s| s.map(|s| (s.id, s.password_hash))),
        UserType::Tutor => storage
            .get_tutor_by_username(&form.username)
            .await
            .map(|t| t.map(|t| (t.id, t.password_hash))),
        UserType::Admin => Ok(None),
    };

    let (uid, password_hash) = match account {
        Ok(Some(found)) => found,
        Ok(None) => return Ok(redirect("/login")),
        Err(e) => {
            error!("Login lookup failed: {}", e);
            return Ok(redirect("/login"));
        }
    };

    if !verify_password(&form.password, &password_hash) {
        return Ok(redirect("/login"));
    }

    match JwtUtils::generate_token_pair(uid, form.user_type, true) {
        Ok(token_pair) => {
            info!("{} {} logged in via form", form.user_type, form.username);
            Ok(HttpResponse::Found()
                .insert_header((actix_web::http::header::LOCATION, "/homepage"))
                .cookie(JwtUtils::create_access_token_cookie(&token_pair.access_token))
                .cookie(JwtUtils::create_refresh_token_cookie(
                    &token_pair.refresh_token,
                ))
                .finish())
        }
        Err(e) => {
            error!("Failed to generate session tokens: {}", e);
            Ok(redirect("/login"))
        }
    }
}

/// GET /logout: revoke the session and clear the cookies.
pub async fn logout(service: &PageService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request);

    if let Some(token) = JwtUtils::extract_access_token(request)
        && let Ok(claims) = JwtUtils::verify_access_token(&token)
    {
        revoke_token(&cache, &claims.jti, claims.exp).await;
    }

    if let Some(token) = JwtUtils::extract_refresh_token_from_cookie(request)
        && let Ok(claims) = JwtUtils::verify_refresh_token(&token)
    {
        revoke_token(&cache, &claims.jti, claims.exp).await;
    }

    Ok(HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/homepage"))
        .cookie(JwtUtils::create_empty_cookie(jwt::ACCESS_TOKEN_COOKIE))
        .cookie(JwtUtils::create_empty_cookie(jwt::REFRESH_TOKEN_COOKIE))
        .finish())
}

/// GET /signup
pub async fn signup_page(
    _service: &PageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if RequireJWT::extract_session(request).is_some() {
        return Ok(redirect("/homepage"));
    }
    Ok(render(&RegisterFormTemplate { error: None }))
}

fn signup_error(message: impl Into<String>) -> HttpResponse {
    render(&RegisterFormTemplate {
        error: Some(message.into()),
    })
}

/// POST /handle_signup: multipart form (account fields plus an optional
/// profile picture). Creates the account, stores the picture, and sends the
/// new user to the login page.
pub async fn handle_signup(
    service: &PageService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let (fields, picture) =
        match collect_multipart(&mut payload, "profile_picture", config.upload.max_size).await {
            Ok(parts) => parts,
            Err(_) => return Ok(signup_error("Malformed signup form")),
        };

    let Some(user_type) = fields
        .get("user_type")
        .and_then(|s| s.parse::<UserType>().ok())
        .filter(|t| *t != UserType::Admin)
    else {
        return Ok(signup_error("Please pick a valid account type"));
    };

    let field = |name: &str| fields.get(name).cloned().unwrap_or_default();
    let name = field("name");
    let username = field("username");
    let email = field("email");
    let password = field("password");
    let summary = fields.get("summary").filter(|s| !s.is_empty()).cloned();
    let Some(age) = fields.get("age").and_then(|s| s.parse::<i32>().ok()) else {
        return Ok(signup_error("Age must be a number"));
    };

    if let Err(msg) = validate_username(&username) {
        return Ok(signup_error(msg));
    }
    if let Err(msg) = validate_email(&email) {
        return Ok(signup_error(msg));
    }
    if let Err(msg) = validate_age(age) {
        return Ok(signup_error(msg));
    }
    if let Err(msg) = validate_password_simple(&password) {
        return Ok(signup_error(msg));
    }

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed during signup: {}", e);
            return Ok(signup_error("Signup failed, please try again"));
        }
    };

    let storage = service.get_storage(request);

    let created = match user_type {
        UserType::Student => storage
            .create_student(CreateStudentRequest {
                name,
                username,
                email,
                password: password_hash,
                age,
                summary,
            })
            .await
            .map(|s| s.id),
        UserType::Tutor => storage
            .create_tutor(CreateTutorRequest {
                name,
                username,
                email,
                password: password_hash,
                age,
                summary,
            })
            .await
            .map(|t| t.id),
        UserType::Admin => unreachable!(),
    };

    let uid = match created {
        Ok(uid) => uid,
        Err(crate::errors::TutorHubError::DuplicateRecord(_)) => {
            return Ok(signup_error(
                "An account with that username or email already exists",
            ));
        }
        Err(e) => {
            error!("Signup failed: {}", e);
            return Ok(signup_error("Signup failed, please try again"));
        }
    };

    if let Some((original_name, data)) = picture {
        match persist_profile_picture(&storage, user_type, uid, &original_name, &data).await {
            Ok(_) | Err(PictureError::AccountMissing) => {}
            Err(_) => {
                // the account exists; a bad picture only costs the avatar
                info!("Profile picture rejected during signup for {user_type} {uid}");
            }
        }
    }

    Ok(redirect("/login"))
}

/// GET /user_info: the logged-in account, or the login form.
pub async fn user_info(service: &PageService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match resolve_account(&storage, request).await {
        Some(user) => Ok(render(&UserInfoTemplate { user })),
        None => Ok(render(&LoginFormTemplate { error: None })),
    }
}

/// POST /handle_update: update the logged-in account from the form.
pub async fn handle_update(
    service: &PageService,
    form: AccountUpdateForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireJWT::extract_session(request) else {
        return Ok(redirect("/login"));
    };

    if let Some(ref email) = form.email
        && let Err(msg) = validate_email(email)
    {
        info!("Rejected account update: {}", msg);
        return Ok(redirect("/user_info"));
    }

    let storage = service.get_storage(request);

    let updated = match session.user_type {
        UserType::Student => storage
            .upsert_student(
                session.uid,
                UpdateStudentRequest {
                    name: form.name,
                    email: form.email,
                    age: form.age,
                    summary: form.summary,
                    ..Default::default()
                },
            )
            .await
            .map(|_| ()),
        UserType::Tutor => storage
            .upsert_tutor(
                session.uid,
                UpdateTutorRequest {
                    name: form.name,
                    email: form.email,
                    age: form.age,
                    summary: form.summary,
                    ..Default::default()
                },
            )
            .await
            .map(|_| ()),
        UserType::Admin => return Ok(redirect("/homepage")),
    };

    match updated {
        Ok(()) => Ok(redirect("/homepage")),
        Err(e) => {
            error!("Account update failed: {}", e);
            Ok(redirect("/user_info"))
        }
    }
}

/// POST /delete_account: remove the logged-in account and kill the session.
pub async fn delete_account(
    service: &PageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireJWT::extract_session(request) else {
        return Ok(redirect("/login"));
    };

    let storage = service.get_storage(request);

    let deleted = match session.user_type {
        UserType::Student => storage.delete_student(session.uid).await,
        UserType::Tutor => storage.delete_tutor(session.uid).await,
        UserType::Admin => Ok(false),
    };

    if let Err(e) = deleted {
        error!("Account deletion failed: {}", e);
        return Ok(redirect("/user_info"));
    }

    info!("Deleted {} account {}", session.user_type, session.uid);
    logout(service, request).await
}

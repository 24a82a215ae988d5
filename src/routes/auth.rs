use actix_web::{Either, HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::UserType;
use crate::models::auth::requests::LoginRequest;
use crate::services::AuthService;

// Lazily constructed global AuthService instance
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// Login bodies arrive as JSON from API clients and as form data from the
// HTML front end; both are accepted.
type LoginBody = Either<web::Json<LoginRequest>, web::Form<LoginRequest>>;

fn into_login_request(body: LoginBody) -> LoginRequest {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

pub async fn student_login(req: HttpRequest, body: LoginBody) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login(UserType::Student, into_login_request(body), &req)
        .await
}

pub async fn tutor_login(req: HttpRequest, body: LoginBody) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login(UserType::Tutor, into_login_request(body), &req)
        .await
}

pub async fn admin_login(req: HttpRequest, body: LoginBody) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .admin_login(into_login_request(body), &req)
        .await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn logout(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&request).await
}

// Route configuration
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/students/login", web::post().to(student_login))
        .route("/tutors/login", web::post().to(tutor_login))
        .route("/admin/login", web::post().to(admin_login))
        .route("/refresh", web::post().to(refresh_token))
        .service(
            web::scope("/user_logout")
                .wrap(middlewares::RequireJWT)
                .route("", web::post().to(logout)),
        );
}

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{AccountUpdateForm, LoginForm};
use crate::services::PageService;
use crate::services::pages::home::DetailQuery;

// Lazily constructed global PageService instance
static PAGE_SERVICE: Lazy<PageService> = Lazy::new(PageService::new_lazy);

pub async fn root(_req: HttpRequest) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/homepage"))
        .finish())
}

pub async fn homepage(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.homepage(&req).await
}

pub async fn login_page(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.login_page(&req).await
}

pub async fn handle_login(
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.handle_login(form.into_inner(), &req).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.logout(&req).await
}

pub async fn signup_page(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.signup_page(&req).await
}

pub async fn handle_signup(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.handle_signup(payload, &req).await
}

pub async fn user_info(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.user_info(&req).await
}

pub async fn handle_update(
    req: HttpRequest,
    form: web::Form<AccountUpdateForm>,
) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.handle_update(form.into_inner(), &req).await
}

pub async fn list_fields(req: HttpRequest, kind: web::Path<String>) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.list_fields(kind.into_inner(), &req).await
}

pub async fn detail(req: HttpRequest, query: web::Query<DetailQuery>) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.detail(query.into_inner(), &req).await
}

pub async fn my_people(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.my_people(&req).await
}

pub async fn my_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.my_courses(&req).await
}

pub async fn delete_account(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.delete_account(&req).await
}

// Route configuration. The RefreshSession middleware resolves the cookie
// session for every page and transparently refreshes expired access
// cookies; /logout stays outside it so a logout is never undone by a
// freshly minted token.
pub fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/logout", web::get().to(logout)).service(
        web::scope("")
            .wrap(middlewares::RefreshSession)
            .route("/", web::get().to(root))
            .route("/homepage", web::get().to(homepage))
            .route("/login", web::get().to(login_page))
            .route("/handle_login", web::post().to(handle_login))
            .route("/signup", web::get().to(signup_page))
            .route("/handle_signup", web::post().to(handle_signup))
            .route("/user_info", web::get().to(user_info))
            .route("/handle_update", web::post().to(handle_update))
            .route("/list_fields/{type}", web::get().to(list_fields))
            .route("/detail", web::get().to(detail))
            .route("/my_people", web::get().to(my_people))
            .route("/my_courses", web::get().to(my_courses))
            .route("/delete_account", web::post().to(delete_account)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    // /detail renders purely from the query string, so it can be driven
    // without a database or session middleware.
    #[actix_web::test]
    async fn test_detail_page_renders_query() {
        let app =
            test::init_service(App::new().route("/detail", web::get().to(detail))).await;

        let req = test::TestRequest::get()
            .uri("/detail?name=English&summary=11%2B%20exam%20prep&type=course")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("English"));
        assert!(html.contains("11+ exam prep"));
    }

    #[actix_web::test]
    async fn test_detail_page_requires_name() {
        let app =
            test::init_service(App::new().route("/detail", web::get().to(detail))).await;

        let req = test::TestRequest::get().uri("/detail").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}

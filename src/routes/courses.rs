use actix_web::{Either, HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::course_registers::requests::CreateCourseRegisterRequest;
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::services::{CourseRegisterService, CourseService};
use crate::utils::SafeIdI64;

// Lazily constructed global service instances
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static REGISTER_SERVICE: Lazy<CourseRegisterService> = Lazy::new(CourseRegisterService::new_lazy);

type CourseBody<T> = Either<web::Json<T>, web::Form<T>>;

fn into_inner<T>(body: CourseBody<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn create_course(
    req: HttpRequest,
    body: CourseBody<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(into_inner(body), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIdI64,
    body: CourseBody<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, into_inner(body), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn list_registers_in_course(
    req: HttpRequest,
    course_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE
        .list_registers_in_course(course_id.0, &req)
        .await
}

pub async fn create_register_in_course(
    req: HttpRequest,
    course_id: SafeIdI64,
    body: CourseBody<CreateCourseRegisterRequest>,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE
        .create_register_in_course(course_id.0, into_inner(body), &req)
        .await
}

// Route configuration
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::put().to(update_course))
            .route(
                "/{id}/course_registers",
                web::get().to(list_registers_in_course),
            )
            .route(
                "/{id}/course_registers",
                web::post().to(create_register_in_course),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/{id}", web::delete().to(delete_course)),
            ),
    );
}

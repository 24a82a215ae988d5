use actix_web::{Either, HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::course_registers::requests::{
    CourseRegisterListParams, CreateCourseRegisterRequest,
};
use crate::services::CourseRegisterService;
use crate::utils::SafeIdI64;

// Lazily constructed global CourseRegisterService instance
static REGISTER_SERVICE: Lazy<CourseRegisterService> = Lazy::new(CourseRegisterService::new_lazy);

type RegisterBody<T> = Either<web::Json<T>, web::Form<T>>;

fn into_inner<T>(body: RegisterBody<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

pub async fn list_registers(
    req: HttpRequest,
    query: web::Query<CourseRegisterListParams>,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE.list_registers(query.into_inner(), &req).await
}

pub async fn create_register(
    req: HttpRequest,
    body: RegisterBody<CreateCourseRegisterRequest>,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE
        .create_register(into_inner(body), &req)
        .await
}

pub async fn get_register(req: HttpRequest, register_id: SafeIdI64) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE.get_register(register_id.0, &req).await
}

pub async fn delete_register(
    req: HttpRequest,
    register_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE.delete_register(register_id.0, &req).await
}

// Route configuration
pub fn configure_course_register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/course_registers")
            .route("", web::get().to(list_registers))
            .route("", web::post().to(create_register))
            .route("/{id}", web::get().to(get_register))
            .route("/{id}", web::delete().to(delete_register)),
    );
}

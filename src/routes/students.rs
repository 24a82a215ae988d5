use actix_web::{Either, HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::services::{CourseRegisterService, StudentService};
use crate::utils::{SafeIdI64, SafeRegisterIdI64};

// Lazily constructed global service instances
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static REGISTER_SERVICE: Lazy<CourseRegisterService> = Lazy::new(CourseRegisterService::new_lazy);

// Student bodies arrive as JSON or form data; both are accepted.
type StudentBody<T> = Either<web::Json<T>, web::Form<T>>;

fn into_inner<T>(body: StudentBody<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    body: StudentBody<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_student(into_inner(body), &req).await
}

pub async fn get_student(req: HttpRequest, student_id: SafeIdI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(student_id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIdI64,
    body: StudentBody<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(student_id.0, into_inner(body), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeIdI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(student_id.0, &req).await
}

pub async fn list_registers_for_student(
    req: HttpRequest,
    student_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE
        .list_registers_for_student(student_id.0, &req)
        .await
}

pub async fn enroll_student(
    req: HttpRequest,
    student_id: SafeIdI64,
    register_id: SafeRegisterIdI64,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE
        .enroll_student(student_id.0, register_id.0, &req)
        .await
}

pub async fn withdraw_student(
    req: HttpRequest,
    student_id: SafeIdI64,
    register_id: SafeRegisterIdI64,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE
        .withdraw_student(student_id.0, register_id.0, &req)
        .await
}

// Route configuration
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{id}", web::get().to(get_student))
            .route("/{id}", web::put().to(update_student))
            .route(
                "/{id}/course_registers",
                web::get().to(list_registers_for_student),
            )
            .route(
                "/{id}/course_registers/{register_id}",
                web::post().to(enroll_student),
            )
            .route(
                "/{id}/course_registers/{register_id}",
                web::delete().to(withdraw_student),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/{id}", web::delete().to(delete_student)),
            ),
    );
}

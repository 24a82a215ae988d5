use actix_web::{Either, HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::tutors::requests::{CreateTutorRequest, TutorListParams, UpdateTutorRequest};
use crate::services::{CourseRegisterService, TutorService};
use crate::utils::{SafeIdI64, SafeRegisterIdI64};

// Lazily constructed global service instances
static TUTOR_SERVICE: Lazy<TutorService> = Lazy::new(TutorService::new_lazy);
static REGISTER_SERVICE: Lazy<CourseRegisterService> = Lazy::new(CourseRegisterService::new_lazy);

// Tutor bodies arrive as JSON or form data; both are accepted.
type TutorBody<T> = Either<web::Json<T>, web::Form<T>>;

fn into_inner<T>(body: TutorBody<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

pub async fn list_tutors(
    req: HttpRequest,
    query: web::Query<TutorListParams>,
) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE.list_tutors(query.into_inner(), &req).await
}

pub async fn create_tutor(
    req: HttpRequest,
    body: TutorBody<CreateTutorRequest>,
) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE.create_tutor(into_inner(body), &req).await
}

pub async fn get_tutor(req: HttpRequest, tutor_id: SafeIdI64) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE.get_tutor(tutor_id.0, &req).await
}

pub async fn update_tutor(
    req: HttpRequest,
    tutor_id: SafeIdI64,
    body: TutorBody<UpdateTutorRequest>,
) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE
        .update_tutor(tutor_id.0, into_inner(body), &req)
        .await
}

pub async fn delete_tutor(req: HttpRequest, tutor_id: SafeIdI64) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE.delete_tutor(tutor_id.0, &req).await
}

pub async fn list_registers_for_tutor(
    req: HttpRequest,
    tutor_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE
        .list_registers_for_tutor(tutor_id.0, &req)
        .await
}

pub async fn enroll_tutor(
    req: HttpRequest,
    tutor_id: SafeIdI64,
    register_id: SafeRegisterIdI64,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE
        .enroll_tutor(tutor_id.0, register_id.0, &req)
        .await
}

pub async fn withdraw_tutor(
    req: HttpRequest,
    tutor_id: SafeIdI64,
    register_id: SafeRegisterIdI64,
) -> ActixResult<HttpResponse> {
    REGISTER_SERVICE
        .withdraw_tutor(tutor_id.0, register_id.0, &req)
        .await
}

// Route configuration
pub fn configure_tutor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tutors")
            .route("", web::get().to(list_tutors))
            .route("", web::post().to(create_tutor))
            .route("/{id}", web::get().to(get_tutor))
            .route("/{id}", web::put().to(update_tutor))
            .route(
                "/{id}/course_registers",
                web::get().to(list_registers_for_tutor),
            )
            .route(
                "/{id}/course_registers/{register_id}",
                web::post().to(enroll_tutor),
            )
            .route(
                "/{id}/course_registers/{register_id}",
                web::delete().to(withdraw_tutor),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/{id}", web::delete().to(delete_tutor)),
            ),
    );
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseRegisterService;
use crate::models::{
    ApiResponse, ErrorCode,
    course_registers::{requests::CreateCourseRegisterRequest, responses::CourseRegisterResponse},
};

/// POST /course_registers: the course comes from the body.
pub async fn create_register(
    service: &CourseRegisterService,
    register_data: CreateCourseRegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(course_id) = register_data.course_id else {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "course_id is required",
        )));
    };

    create_in_course(service, course_id, &register_data.name, request).await
}

/// Shared creation path: checks the course exists and the name is free
/// within it.
pub(crate) async fn create_in_course(
    service: &CourseRegisterService,
    course_id: i64,
    name: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if name.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Register name must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                format!("Course {course_id} does not exist"),
            )));
        }
        Err(e) => {
            error!("Course lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Course lookup failed: {e}"),
                )),
            );
        }
    }

    match storage
        .get_course_register_by_course_and_name(course_id, name)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::RegisterNameTaken,
                "A course register with that name already exists in that course",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Course register lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Course register lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.create_course_register(name, course_id).await {
        Ok(course_register) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CourseRegisterResponse { course_register },
            "Course register created successfully",
        ))),
        Err(e) => {
            error!("Course register creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Course register creation failed: {e}"),
                )),
            )
        }
    }
}

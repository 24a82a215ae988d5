use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseRegisterService;
use crate::models::{
    ApiResponse, ErrorCode,
    course_registers::requests::CreateCourseRegisterRequest,
};

/// GET /courses/{course_id}/course_registers
pub async fn list_registers_in_course(
    service: &CourseRegisterService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
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

    match storage.list_registers_in_course(course_id).await {
        Ok(registers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            registers,
            "Course registers retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list registers in course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list course registers: {e}"),
                )),
            )
        }
    }
}

/// POST /courses/{course_id}/course_registers: the course comes from the
/// path; a course_id in the body must agree with it.
pub async fn create_register_in_course(
    service: &CourseRegisterService,
    course_id: i64,
    register_data: CreateCourseRegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(body_course_id) = register_data.course_id
        && body_course_id != course_id
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "course_id in the body does not match the URL",
        )));
    }

    super::create::create_in_course(service, course_id, &register_data.name, request).await
}

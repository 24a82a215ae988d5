use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseRegisterService;
use crate::errors::TutorHubError;
use crate::models::{
    ApiResponse, ErrorCode,
    course_registers::responses::CourseRegisterDetailListResponse,
};

/// GET /students/{student_id}/course_registers: every register the student
/// is enrolled in, with course and members resolved.
pub async fn list_registers_for_student(
    service: &CourseRegisterService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_register_details_for_student(student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseRegisterDetailListResponse { items },
            "Course registers retrieved successfully",
        ))),
        Err(TutorHubError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::AccountNotFound, msg))),
        Err(e) => {
            error!(
                "Failed to list registers for student {}: {}",
                student_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list course registers: {e}"),
                )),
            )
        }
    }
}

/// GET /tutors/{tutor_id}/course_registers: same shape for tutors.
pub async fn list_registers_for_tutor(
    service: &CourseRegisterService,
    tutor_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_register_details_for_tutor(tutor_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseRegisterDetailListResponse { items },
            "Course registers retrieved successfully",
        ))),
        Err(TutorHubError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::AccountNotFound, msg))),
        Err(e) => {
            error!("Failed to list registers for tutor {}: {}", tutor_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list course registers: {e}"),
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseRegisterService;
use crate::models::{ApiResponse, ErrorCode};

/// A register cannot be deleted while students are still enrolled in it.
pub async fn delete_register(
    service: &CourseRegisterService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_register_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RegisterNotFound,
                format!("Course register {id} does not exist"),
            )));
        }
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

    match storage.count_students_in_register(id).await {
        Ok(0) => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::RegisterHasStudents,
                "There are students enrolled on this course register",
            )));
        }
        Err(e) => {
            error!("Enrollment count failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Enrollment count failed: {e}"),
                )),
            );
        }
    }

    match storage.delete_course_register(id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course register deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RegisterNotFound,
            format!("Course register {id} does not exist"),
        ))),
        Err(e) => {
            error!("Failed to delete course register {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete course register: {e}"),
                )),
            )
        }
    }
}

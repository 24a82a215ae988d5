use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};

/// Deleting a course cascades to its registers; any authenticated session
/// may do it.
pub async fn delete_course(
    service: &CourseService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_course(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            format!("Course {id} does not exist"),
        ))),
        Err(e) => {
            error!("Failed to delete course {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete course: {e}"),
                )),
            )
        }
    }
}

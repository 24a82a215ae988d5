use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseRegisterService;
use crate::models::{
    ApiResponse, ErrorCode, course_registers::responses::CourseRegisterResponse,
};

pub async fn get_register(
    service: &CourseRegisterService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_register_by_id(id).await {
        Ok(Some(course_register)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseRegisterResponse { course_register },
            "Course register retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RegisterNotFound,
            format!("Course register {id} does not exist"),
        ))),
        Err(e) => {
            error!("Failed to get course register {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course register: {e}"),
                )),
            )
        }
    }
}

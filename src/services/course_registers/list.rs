use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseRegisterService;
use crate::models::{
    ApiResponse, ErrorCode, course_registers::requests::CourseRegisterListParams,
};

pub async fn list_registers(
    service: &CourseRegisterService,
    params: CourseRegisterListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_course_registers_with_pagination(params.pagination.page, params.pagination.size)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Course registers retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list course registers: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list course registers: {e}"),
                )),
            )
        }
    }
}

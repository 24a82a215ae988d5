use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TutorService;
use crate::models::{ApiResponse, ErrorCode, tutors::requests::TutorListParams};

pub async fn list_tutors(
    service: &TutorService,
    params: TutorListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_tutors_with_pagination(params.into()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Tutors retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list tutors: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list tutors: {e}"),
                )),
            )
        }
    }
}

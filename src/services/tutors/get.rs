use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TutorService;
use crate::models::{ApiResponse, ErrorCode, tutors::responses::TutorResponse};

pub async fn get_tutor(
    service: &TutorService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_tutor_by_id(id).await {
        Ok(Some(tutor)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TutorResponse { tutor },
            "Tutor retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            format!("Tutor {id} does not exist"),
        ))),
        Err(e) => {
            error!("Failed to get tutor {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get tutor: {e}"),
                )),
            )
        }
    }
}

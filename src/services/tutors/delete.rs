use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TutorService;
use crate::middlewares::RequireJWT;
use crate::models::auth::UserType;
use crate::models::{ApiResponse, ErrorCode};

/// Only the account owner or the admin may delete a tutor.
pub async fn delete_tutor(
    service: &TutorService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireJWT::extract_session(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing session",
        )));
    };

    if !session.can_manage(UserType::Tutor, id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You are not permitted to delete other accounts",
        )));
    }

    let storage = service.get_storage(request);

    match storage.delete_tutor(id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Tutor deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            format!("Tutor {id} does not exist"),
        ))),
        Err(e) => {
            error!("Failed to delete tutor {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete tutor: {e}"),
                )),
            )
        }
    }
}

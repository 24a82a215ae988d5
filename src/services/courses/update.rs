use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::errors::TutorHubError;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::UpdateCourseRequest, responses::CourseResponse},
};

/// PUT semantics: update the course when it exists, otherwise create it
/// under the requested id. 200 for updates, 201 for creates.
pub async fn update_course(
    service: &CourseService,
    id: i64,
    update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.upsert_course(id, update_data).await {
        Ok((course, created)) => {
            let response = ApiResponse::success(
                CourseResponse { course },
                if created {
                    "Course created successfully"
                } else {
                    "Course updated successfully"
                },
            );
            if created {
                Ok(HttpResponse::Created().json(response))
            } else {
                Ok(HttpResponse::Ok().json(response))
            }
        }
        Err(TutorHubError::Validation(msg)) => Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))),
        Err(TutorHubError::DuplicateRecord(_)) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CourseCreationFailed,
                "A course with that name already exists",
            )))
        }
        Err(e) => {
            error!("Failed to upsert course {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update course: {e}"),
                )),
            )
        }
    }
}

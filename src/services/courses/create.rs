use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::errors::TutorHubError;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{requests::CreateCourseRequest, responses::CourseResponse},
};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if course_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Course name must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_course(course_data).await {
        Ok(course) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CourseResponse { course },
            "Course created successfully",
        ))),
        Err(TutorHubError::DuplicateRecord(_)) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CourseCreationFailed,
                "A course with that name already exists",
            )))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseCreationFailed,
                    format!("Course creation failed: {e}"),
                )),
            )
        }
    }
}

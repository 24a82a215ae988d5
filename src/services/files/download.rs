use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;

use super::FileService;
use crate::models::auth::UserType;
use crate::models::{ApiResponse, ErrorCode};

fn picture_mime(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// GET /utils/file/{user_type}/{uid}: serve the stored profile picture.
pub async fn handle_download(
    service: &FileService,
    user_type: UserType,
    uid: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let picture_path = match user_type {
        UserType::Student => storage
            .get_student_by_id(uid)
            .await
            .map(|s| s.and_then(|s| s.profile_picture)),
        UserType::Tutor => storage
            .get_tutor_by_id(uid)
            .await
            .map(|t| t.and_then(|t| t.profile_picture)),
        UserType::Admin => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Invalid user type specified",
            )));
        }
    };

    match picture_path {
        Ok(Some(path)) => match std::fs::read(&path) {
            Ok(data) => Ok(HttpResponse::Ok()
                .content_type(picture_mime(&path))
                .body(data)),
            Err(e) => {
                tracing::error!("Failed to read profile picture {}: {}", path, e);
                Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FileNotFound,
                    "Profile picture is missing from disk",
                )))
            }
        },
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No profile picture for that account",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Account lookup failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_mime() {
        assert_eq!(picture_mime("uploads/students/1.png"), "image/png");
        assert_eq!(picture_mime("uploads/tutors/2.jpeg"), "image/jpeg");
        assert_eq!(picture_mime("noextension"), "application/octet-stream");
    }
}

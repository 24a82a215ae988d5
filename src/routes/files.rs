use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use std::str::FromStr;

use crate::models::auth::UserType;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::FileService;

// Lazily constructed global FileService instance
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn upload_file(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    FILE_SERVICE.upload(&req, payload).await
}

pub async fn download_file(
    req: HttpRequest,
    path: web::Path<(String, i64)>,
) -> ActixResult<HttpResponse> {
    let (user_type, uid) = path.into_inner();
    match UserType::from_str(&user_type) {
        Ok(user_type) => FILE_SERVICE.download(user_type, uid, &req).await,
        Err(_) => Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Invalid user type specified",
        ))),
    }
}

// Route configuration
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/utils")
            .route("/file", web::post().to(upload_file))
            .route("/file/{user_type}/{uid}", web::get().to(download_file)),
    );
}

//! Embedded static assets for the HTML front end.
//!
//! The stylesheet and images are compiled into the binary with rust-embed
//! and served under /static/.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

/// Static assets embedded at compile time from static/.
#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "webp" => "image/webp",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

pub async fn serve_static(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');

    match StaticAssets::get(path) {
        Some(file) => Ok(HttpResponse::Ok()
            .content_type(get_mime_type(path))
            .insert_header(("Cache-Control", "public, max-age=31536000, immutable"))
            .body(file.data.to_vec())),
        None => Ok(HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Not found")),
    }
}

// Route configuration
pub fn configure_static_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/static/{tail:.*}", web::get().to(serve_static));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_mime_type() {
        assert_eq!(get_mime_type("style.css"), "text/css; charset=utf-8");
        assert_eq!(get_mime_type("logo.png"), "image/png");
        assert_eq!(get_mime_type("unknown.xyz"), "application/octet-stream");
    }

    #[test]
    fn test_stylesheet_is_embedded() {
        assert!(StaticAssets::get("style.css").is_some());
    }

    #[actix_web::test]
    async fn test_serve_static_route() {
        let app =
            actix_web::test::init_service(actix_web::App::new().configure(configure_static_routes))
                .await;

        let req = actix_web::test::TestRequest::get()
            .uri("/static/style.css")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let req = actix_web::test::TestRequest::get()
            .uri("/static/missing.css")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}

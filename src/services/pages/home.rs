use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use tracing::error;

use super::PageService;
use super::templates::{
    AccountView, DetailTemplate, HomepageTemplate, ListItemView, ListTemplate, render,
};
use crate::middlewares::RequireJWT;
use crate::models::auth::UserType;
use crate::models::courses::requests::CourseListQuery;
use crate::models::students::requests::StudentListQuery;
use crate::models::tutors::requests::TutorListQuery;
use crate::storage::Storage;
use std::sync::Arc;

// page-sized slices for the overview lists
const PAGE_LIST_SIZE: i64 = 50;

/// Resolve the logged-in account behind the session, when there is one.
pub(crate) async fn resolve_account(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> Option<AccountView> {
    let session = RequireJWT::extract_session(request)?;

    match session.user_type {
        UserType::Student => match storage.get_student_by_id(session.uid).await {
            Ok(student) => student.map(AccountView::from_student),
            Err(e) => {
                error!("Failed to load student {}: {}", session.uid, e);
                None
            }
        },
        UserType::Tutor => match storage.get_tutor_by_id(session.uid).await {
            Ok(tutor) => tutor.map(AccountView::from_tutor),
            Err(e) => {
                error!("Failed to load tutor {}: {}", session.uid, e);
                None
            }
        },
        UserType::Admin => Some(AccountView {
            uid: session.uid,
            name: "Administrator".to_string(),
            username: "admin".to_string(),
            email: String::new(),
            age: 0,
            summary: String::new(),
            user_type: UserType::Admin.to_string(),
        }),
    }
}

pub(crate) async fn load_tutors(storage: &Arc<dyn Storage>) -> Vec<ListItemView> {
    match storage
        .list_tutors_with_pagination(TutorListQuery {
            page: 1,
            size: PAGE_LIST_SIZE,
            search: None,
        })
        .await
    {
        Ok(response) => response
            .items
            .into_iter()
            .map(|t| ListItemView {
                name: t.name,
                summary: t.summary.unwrap_or_default(),
                kind: "tutor".to_string(),
            })
            .collect(),
        Err(e) => {
            error!("Failed to list tutors for page: {}", e);
            Vec::new()
        }
    }
}

pub(crate) async fn load_students(storage: &Arc<dyn Storage>) -> Vec<ListItemView> {
    match storage
        .list_students_with_pagination(StudentListQuery {
            page: 1,
            size: PAGE_LIST_SIZE,
            search: None,
        })
        .await
    {
        Ok(response) => response
            .items
            .into_iter()
            .map(|s| ListItemView {
                name: s.name,
                summary: s.summary.unwrap_or_default(),
                kind: "student".to_string(),
            })
            .collect(),
        Err(e) => {
            error!("Failed to list students for page: {}", e);
            Vec::new()
        }
    }
}

pub(crate) async fn load_courses(storage: &Arc<dyn Storage>) -> Vec<ListItemView> {
    match storage
        .list_courses_with_pagination(CourseListQuery {
            page: 1,
            size: PAGE_LIST_SIZE,
            search: None,
        })
        .await
    {
        Ok(response) => response
            .items
            .into_iter()
            .map(|c| ListItemView {
                name: c.name,
                summary: c.summary.unwrap_or_default(),
                kind: "course".to_string(),
            })
            .collect(),
        Err(e) => {
            error!("Failed to list courses for page: {}", e);
            Vec::new()
        }
    }
}

pub(crate) async fn load_registers(storage: &Arc<dyn Storage>) -> Vec<ListItemView> {
    match storage
        .list_course_registers_with_pagination(1, PAGE_LIST_SIZE)
        .await
    {
        Ok(response) => response
            .items
            .into_iter()
            .map(|r| ListItemView {
                name: r.name,
                summary: format!("Session of course {}", r.course_id),
                kind: "register".to_string(),
            })
            .collect(),
        Err(e) => {
            error!("Failed to list course registers for page: {}", e);
            Vec::new()
        }
    }
}

/// GET /homepage
pub async fn homepage(service: &PageService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = resolve_account(&storage, request).await;
    let tutors = load_tutors(&storage).await;
    let students = load_students(&storage).await;
    let courses = load_courses(&storage).await;
    let events = load_registers(&storage).await;

    Ok(render(&HomepageTemplate {
        user,
        tutors,
        students,
        courses,
        events,
    }))
}

/// GET /list_fields/{type}
pub async fn list_fields(
    service: &PageService,
    kind: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let fields = match kind.as_str() {
        "tutor" => load_tutors(&storage).await,
        "student" => load_students(&storage).await,
        "course" => load_courses(&storage).await,
        _ => load_registers(&storage).await,
    };

    Ok(render(&ListTemplate { kind, fields }))
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// GET /detail: renders straight from the query string.
pub async fn detail(
    _service: &PageService,
    query: DetailQuery,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    Ok(render(&DetailTemplate {
        name: query.name,
        summary: query.summary,
        kind: query.kind,
    }))
}

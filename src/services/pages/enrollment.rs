use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PageService;
use super::templates::{ListItemView, ListTemplate, redirect, render};
use crate::middlewares::RequireJWT;
use crate::models::auth::UserType;
use crate::models::course_registers::entities::CourseRegisterDetail;

/// GET /my_people: a student sees the tutors of their registers, a tutor
/// sees the students of theirs.
pub async fn my_people(service: &PageService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let Some(session) = RequireJWT::extract_session(request) else {
        return Ok(redirect("/login"));
    };

    let storage = service.get_storage(request);

    let (details, kind) = match session.user_type {
        UserType::Student => (
            storage.list_register_details_for_student(session.uid).await,
            "My Tutors",
        ),
        UserType::Tutor => (
            storage.list_register_details_for_tutor(session.uid).await,
            "My Students",
        ),
        UserType::Admin => return Ok(redirect("/homepage")),
    };

    let details = match details {
        Ok(details) => details,
        Err(e) => {
            error!("Failed to load registers for {}: {}", session.uid, e);
            return Ok(redirect("/homepage"));
        }
    };

    let fields = flatten_people(&session.user_type, details);

    Ok(render(&ListTemplate {
        kind: kind.to_string(),
        fields,
    }))
}

fn flatten_people(user_type: &UserType, details: Vec<CourseRegisterDetail>) -> Vec<ListItemView> {
    let mut fields = Vec::new();
    for detail in details {
        match user_type {
            // a student's counterpart is the tutors on the register
            UserType::Student => {
                for tutor in detail.tutors {
                    fields.push(ListItemView {
                        name: tutor.name,
                        summary: tutor.summary.unwrap_or_default(),
                        kind: "tutor".to_string(),
                    });
                }
            }
            UserType::Tutor => {
                for student in detail.students {
                    fields.push(ListItemView {
                        name: student.name,
                        summary: student.summary.unwrap_or_default(),
                        kind: "student".to_string(),
                    });
                }
            }
            UserType::Admin => {}
        }
    }
    fields
}

/// GET /my_courses: the courses behind the account's registers.
pub async fn my_courses(service: &PageService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let Some(session) = RequireJWT::extract_session(request) else {
        return Ok(redirect("/login"));
    };

    let storage = service.get_storage(request);

    let details = match session.user_type {
        UserType::Student => storage.list_register_details_for_student(session.uid).await,
        UserType::Tutor => storage.list_register_details_for_tutor(session.uid).await,
        UserType::Admin => return Ok(redirect("/homepage")),
    };

    let details = match details {
        Ok(details) => details,
        Err(e) => {
            error!("Failed to load registers for {}: {}", session.uid, e);
            return Ok(redirect("/homepage"));
        }
    };

    let fields: Vec<ListItemView> = details
        .into_iter()
        .filter_map(|detail| detail.course)
        .map(|course| ListItemView {
            name: course.name,
            summary: course.summary.unwrap_or_default(),
            kind: "course".to_string(),
        })
        .collect();

    Ok(render(&ListTemplate {
        kind: "My Courses".to_string(),
        fields,
    }))
}

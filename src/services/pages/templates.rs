//! Askama templates backing the HTML front end.

use actix_web::HttpResponse;
use askama::Template;

use crate::models::auth::UserType;
use crate::models::students::entities::Student;
use crate::models::tutors::entities::Tutor;

/// Account fields the pages display, independent of the account kind.
#[derive(Debug, Clone)]
pub struct AccountView {
    pub uid: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub age: i32,
    pub summary: String,
    pub user_type: String,
}

impl AccountView {
    pub fn from_student(student: Student) -> Self {
        Self {
            uid: student.id,
            name: student.name,
            username: student.username,
            email: student.email,
            age: student.age,
            summary: student.summary.unwrap_or_default(),
            user_type: UserType::Student.to_string(),
        }
    }

    pub fn from_tutor(tutor: Tutor) -> Self {
        Self {
            uid: tutor.id,
            name: tutor.name,
            username: tutor.username,
            email: tutor.email,
            age: tutor.age,
            summary: tutor.summary.unwrap_or_default(),
            user_type: UserType::Tutor.to_string(),
        }
    }
}

/// One row of a listing page: enough for the list and detail views.
#[derive(Debug, Clone)]
pub struct ListItemView {
    pub name: String,
    pub summary: String,
    pub kind: String,
}

#[derive(Template)]
#[template(path = "homepage.html")]
pub struct HomepageTemplate {
    pub user: Option<AccountView>,
    pub tutors: Vec<ListItemView>,
    pub students: Vec<ListItemView>,
    pub courses: Vec<ListItemView>,
    pub events: Vec<ListItemView>,
}

#[derive(Template)]
#[template(path = "login_form.html")]
pub struct LoginFormTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "register_form.html")]
pub struct RegisterFormTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "user_info.html")]
pub struct UserInfoTemplate {
    pub user: AccountView,
}

#[derive(Template)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub kind: String,
    pub fields: Vec<ListItemView>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub name: String,
    pub summary: String,
    pub kind: String,
}

// Template rendering helper
pub(crate) fn render<T: Template>(template: &T) -> HttpResponse {
    match template.render() {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) => {
            tracing::error!("Template error: {}", err);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Template rendering failed")
        }
    }
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, location))
        .finish()
}

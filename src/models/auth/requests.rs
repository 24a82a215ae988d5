use serde::Deserialize;

use super::entities::UserType;

// Credentials for the login endpoints, accepted as JSON or form data
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// Login form posted by the HTML front end; carries the account kind picker
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub user_type: UserType,
    pub username: String,
    pub password: String,
}

// Signup form posted by the HTML front end
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub user_type: UserType,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: i32,
    pub summary: Option<String>,
}

// Account update form posted by the HTML front end
#[derive(Debug, Deserialize)]
pub struct AccountUpdateForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub summary: Option<String>,
}

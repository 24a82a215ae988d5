pub mod account;
pub mod enrollment;
pub mod home;
pub mod templates;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::auth::requests::{AccountUpdateForm, LoginForm};
use crate::storage::Storage;

pub struct PageService {
    storage: Option<Arc<dyn Storage>>,
}

impl PageService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<dyn ObjectCache> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .expect("Cache not found in app data")
            .get_ref()
            .clone()
    }

    pub async fn homepage(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        home::homepage(self, request).await
    }

    pub async fn list_fields(
        &self,
        kind: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        home::list_fields(self, kind, request).await
    }

    pub async fn detail(
        &self,
        query: home::DetailQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        home::detail(self, query, request).await
    }

    pub async fn login_page(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        account::login_page(self, request).await
    }

    pub async fn handle_login(
        &self,
        form: LoginForm,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        account::handle_login(self, form, request).await
    }

    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        account::logout(self, request).await
    }

    pub async fn signup_page(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        account::signup_page(self, request).await
    }

    pub async fn handle_signup(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        account::handle_signup(self, payload, request).await
    }

    pub async fn user_info(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        account::user_info(self, request).await
    }

    pub async fn handle_update(
        &self,
        form: AccountUpdateForm,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        account::handle_update(self, form, request).await
    }

    pub async fn delete_account(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        account::delete_account(self, request).await
    }

    pub async fn my_people(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        enrollment::my_people(self, request).await
    }

    pub async fn my_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        enrollment::my_courses(self, request).await
    }
}

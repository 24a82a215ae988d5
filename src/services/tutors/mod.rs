pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::tutors::requests::{
    CreateTutorRequest, TutorListParams, UpdateTutorRequest,
};
use crate::storage::Storage;

pub struct TutorService {
    storage: Option<Arc<dyn Storage>>,
}

impl TutorService {
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

    pub async fn list_tutors(
        &self,
        params: TutorListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_tutors(self, params, request).await
    }

    pub async fn create_tutor(
        &self,
        tutor_data: CreateTutorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_tutor(self, tutor_data, request).await
    }

    pub async fn get_tutor(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_tutor(self, id, request).await
    }

    pub async fn update_tutor(
        &self,
        id: i64,
        update_data: UpdateTutorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_tutor(self, id, update_data, request).await
    }

    pub async fn delete_tutor(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_tutor(self, id, request).await
    }
}

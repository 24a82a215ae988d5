pub mod create;
pub mod delete;
pub mod enrollment;
pub mod get;
pub mod in_course;
pub mod list;
pub mod rosters;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::course_registers::requests::{
    CourseRegisterListParams, CreateCourseRegisterRequest,
};
use crate::storage::Storage;

pub struct CourseRegisterService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseRegisterService {
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

    pub async fn list_registers(
        &self,
        params: CourseRegisterListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_registers(self, params, request).await
    }

    pub async fn create_register(
        &self,
        register_data: CreateCourseRegisterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_register(self, register_data, request).await
    }

    pub async fn get_register(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_register(self, id, request).await
    }

    pub async fn delete_register(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_register(self, id, request).await
    }

    pub async fn list_registers_in_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        in_course::list_registers_in_course(self, course_id, request).await
    }

    pub async fn create_register_in_course(
        &self,
        course_id: i64,
        register_data: CreateCourseRegisterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        in_course::create_register_in_course(self, course_id, register_data, request).await
    }

    pub async fn enroll_student(
        &self,
        student_id: i64,
        register_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollment::enroll_student(self, student_id, register_id, request).await
    }

    pub async fn withdraw_student(
        &self,
        student_id: i64,
        register_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollment::withdraw_student(self, student_id, register_id, request).await
    }

    pub async fn enroll_tutor(
        &self,
        tutor_id: i64,
        register_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollment::enroll_tutor(self, tutor_id, register_id, request).await
    }

    pub async fn withdraw_tutor(
        &self,
        tutor_id: i64,
        register_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollment::withdraw_tutor(self, tutor_id, register_id, request).await
    }

    pub async fn list_registers_for_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        rosters::list_registers_for_student(self, student_id, request).await
    }

    pub async fn list_registers_for_tutor(
        &self,
        tutor_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        rosters::list_registers_for_tutor(self, tutor_id, request).await
    }
}

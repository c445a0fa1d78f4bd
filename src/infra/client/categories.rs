use reqwest::Method;
use webblog_api_types::{Category, CategoryWriteRequest};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("categories").await
    }

    pub async fn create_category(&self, payload: &CategoryWriteRequest) -> Result<(), ApiError> {
        self.send_unit(Method::POST, "categories", Some(payload))
            .await
    }

    pub async fn update_category(
        &self,
        id: i64,
        payload: &CategoryWriteRequest,
    ) -> Result<(), ApiError> {
        self.send_unit(Method::PUT, &format!("categories/{id}"), Some(payload))
            .await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("categories/{id}")).await
    }
}

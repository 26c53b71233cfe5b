use crate::error::AppResult;
use crate::http_client::ApiClient;
use crate::models::{ServiceRecordModel, ServiceUpdate};

/// Repair logbook endpoints: search and edit.
#[derive(Clone)]
pub struct ServiceHistoryService {
    client: ApiClient,
}

impl ServiceHistoryService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List service records, optionally filtered by ticket number or
    /// serial/barcode substring.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<ServiceRecordModel>> {
        match search {
            Some(search) => {
                self.client
                    .get_json_query("/services", &[("search", search)], "services")
                    .await
            }
            None => self.client.get_json("/services", "services").await,
        }
    }

    pub async fn update(&self, id: u64, update: &ServiceUpdate) -> AppResult<ServiceRecordModel> {
        self.client
            .put_json(
                &format!("/services/{}", id),
                update,
                &format!("service {}", id),
            )
            .await
    }
}

use crate::error::AppResult;
use crate::http_client::ApiClient;
use crate::models::{AreaModel, SchoolModel};

/// Area/school hierarchy endpoints.
#[derive(Clone)]
pub struct LocationsService {
    client: ApiClient,
}

impl LocationsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn area(&self, id: u64) -> AppResult<AreaModel> {
        self.client
            .get_json(&format!("/areas/{}", id), &format!("area {}", id))
            .await
    }

    pub async fn school(&self, id: u64) -> AppResult<SchoolModel> {
        self.client
            .get_json(&format!("/schools/{}", id), &format!("school {}", id))
            .await
    }

    pub async fn area_schools(&self, area_id: u64) -> AppResult<Vec<SchoolModel>> {
        self.client
            .get_json(
                &format!("/areas/{}/schools", area_id),
                &format!("area {}", area_id),
            )
            .await
    }
}

use crate::error::AppResult;
use crate::http_client::ApiClient;
use crate::models::UpdateLogModel;

/// Update-log history endpoint.
#[derive(Clone)]
pub struct LogsService {
    client: ApiClient,
}

impl LogsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<UpdateLogModel>> {
        match search {
            Some(search) => {
                self.client
                    .get_json_query("/logs", &[("search", search)], "logs")
                    .await
            }
            None => self.client.get_json("/logs", "logs").await,
        }
    }
}

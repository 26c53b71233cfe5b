use async_trait::async_trait;

use crate::error::AppResult;
use crate::http_client::ApiClient;
use crate::models::{AssetListFilter, AssetModel};
use crate::resolver::AssetLookup;

/// Asset endpoints: detail by id, detail by barcode, per-school listing.
#[derive(Clone)]
pub struct AssetsService {
    client: ApiClient,
}

impl AssetsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn asset(&self, id: u64) -> AppResult<AssetModel> {
        self.client
            .get_json(&format!("/assets/{}", id), &id.to_string())
            .await
    }

    pub async fn asset_by_barcode(&self, barcode: &str) -> AppResult<AssetModel> {
        self.client
            .get_json(
                &format!("/assets/barcode/{}", urlencoding::encode(barcode)),
                barcode,
            )
            .await
    }

    pub async fn school_assets(
        &self,
        school_id: u64,
        filter: &AssetListFilter,
    ) -> AppResult<Vec<AssetModel>> {
        let school_id = school_id.to_string();
        let mut query: Vec<(&str, &str)> = vec![("school_id", school_id.as_str())];
        if let Some(type_code) = filter.type_code.as_deref() {
            query.push(("type_code", type_code));
        }
        if let Some(category_code) = filter.category_code.as_deref() {
            query.push(("category_code", category_code));
        }

        self.client
            .get_json_query("/assets", &query, &format!("school {}", school_id))
            .await
    }
}

#[async_trait]
impl AssetLookup for AssetsService {
    async fn asset_by_id(&self, id: u64) -> AppResult<AssetModel> {
        self.asset(id).await
    }

    async fn asset_by_barcode(&self, barcode: &str) -> AppResult<AssetModel> {
        AssetsService::asset_by_barcode(self, barcode).await
    }
}

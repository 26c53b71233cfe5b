use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the repair logbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecordModel {
    pub id: i64,
    pub ticket_no: Option<String>,
    pub service_date: Option<NaiveDate>,
    pub asset_name: Option<String>,
    /// Serial number or barcode of the serviced asset, whichever was recorded.
    pub sn_or_barcode: String,
    pub production_year: Option<i32>,
    pub unit_name: Option<String>,
    pub owner: Option<String>,
    pub issue_description: Option<String>,
    pub vendor: Option<String>,
    pub status: String,
}

/// Fields accepted by the service update endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceUpdate {
    pub ticket_no: Option<String>,
    pub service_date: Option<NaiveDate>,
    pub asset_name: Option<String>,
    pub sn_or_barcode: String,
    pub production_year: Option<i32>,
    pub unit_name: Option<String>,
    pub owner: Option<String>,
    pub issue_description: Option<String>,
    pub vendor: Option<String>,
    pub status: String,
}

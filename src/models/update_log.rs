use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit trail entry written by the backend on every asset mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLogModel {
    pub id: i64,
    pub asset_barcode: Option<String>,
    pub asset_name: Option<String>,
    pub action: String,
    pub details: Option<String>,
    pub actor: Option<String>,
    pub school_name: Option<String>,
    pub area_name: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational status reported by the inventory backend.
///
/// The backend stores localized labels; `alias` accepts them on the wire
/// while unknown labels collapse into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    #[serde(alias = "Berfungsi")]
    Functioning,
    #[serde(alias = "Rusak")]
    Broken,
    #[serde(other)]
    Other,
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetStatus::Functioning => write!(f, "Functioning"),
            AssetStatus::Broken => write!(f, "Broken"),
            AssetStatus::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetModel {
    pub id: i64,
    pub barcode: String,
    pub school_id: Option<i64>,
    pub city_code: Option<String>,
    pub type_code: Option<String>,
    pub category_code: Option<String>,
    pub category_name: Option<String>,
    pub subcategory_code: Option<String>,
    pub procurement_month: Option<i32>,
    pub procurement_year: Option<i32>,
    pub sequence_number: Option<i32>,
    pub brand: Option<String>,
    pub model_series: Option<String>,
    pub serial_number: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub gpu: Option<String>,
    pub storage: Option<String>,
    pub os: Option<String>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub connect_to: Option<String>,
    pub channel: Option<String>,
    pub room: Option<String>,
    pub floor: Option<String>,
    pub placement: Option<String>,
    pub assigned_to: Option<String>,
    pub status: AssetStatus,
}

impl AssetModel {
    /// Display name used in logs and list rows.
    pub fn display_name(&self) -> String {
        match (self.brand.as_deref(), self.model_series.as_deref()) {
            (Some(brand), Some(model)) => format!("{} - {}", brand, model),
            (Some(brand), None) => brand.to_string(),
            (None, Some(model)) => model.to_string(),
            (None, None) => self.barcode.clone(),
        }
    }

    /// Category label, falling back to the raw code.
    pub fn category_label(&self) -> Option<&str> {
        self.category_name
            .as_deref()
            .or(self.category_code.as_deref())
    }
}

/// Filters accepted by the school asset list endpoint.
#[derive(Debug, Clone, Default)]
pub struct AssetListFilter {
    pub type_code: Option<String>,
    pub category_code: Option<String>,
}

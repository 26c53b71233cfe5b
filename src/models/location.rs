use serde::{Deserialize, Serialize};

/// Administrative area grouping schools and work units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaModel {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolModel {
    pub id: i64,
    pub name: String,
    pub area_id: Option<i64>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileModel {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Payload for the profile update endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub full_name: String,
}

use crate::error::AppResult;
use crate::http_client::ApiClient;
use crate::models::{ProfileUpdate, UserProfileModel};

/// Signed-in user profile endpoints.
///
/// `rename` returns the refreshed profile from the update response so
/// callers refresh their own state instead of refetching everything.
#[derive(Clone)]
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn me(&self) -> AppResult<UserProfileModel> {
        self.client.get_json("/users/me", "profile").await
    }

    pub async fn rename(&self, full_name: &str) -> AppResult<UserProfileModel> {
        let update = ProfileUpdate {
            full_name: full_name.to_string(),
        };
        self.client.put_json("/users/me", &update, "profile").await
    }
}

use std::env;
use std::time::Duration;

use crate::error::AppResult;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
    pub scan_fps: u32,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            api_base_url: env::var("ASSET_API_URL")?,
            api_token: env::var("ASSET_API_TOKEN").ok(),
            request_timeout: Duration::from_secs(
                env::var("ASSET_API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
            scan_fps: env::var("SCAN_FPS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        })
    }
}

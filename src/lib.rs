pub mod config;
pub mod error;
pub mod http_client;
pub mod models;
pub mod presenter;
pub mod resolver;
pub mod scan;
pub mod scanner;
pub mod services;
pub mod view;

pub use config::Config;
pub use error::{AppError, AppResult};

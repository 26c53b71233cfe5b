pub mod assets_service;
pub mod locations_service;
pub mod logs_service;
pub mod profile_service;
pub mod service_history_service;

pub use assets_service::AssetsService;
pub use locations_service::LocationsService;
pub use logs_service::LogsService;
pub use profile_service::ProfileService;
pub use service_history_service::ServiceHistoryService;

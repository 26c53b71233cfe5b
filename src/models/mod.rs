pub mod asset;
pub mod location;
pub mod service_history;
pub mod update_log;
pub mod user;

pub use asset::*;
pub use location::*;
pub use service_history::*;
pub use update_log::*;
pub use user::*;

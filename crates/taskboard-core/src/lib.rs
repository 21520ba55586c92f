pub mod config;
pub mod error;
pub mod result;

pub use config::AppConfig;
pub use error::TaskboardError;
pub use result::TaskboardResult;

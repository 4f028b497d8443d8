pub mod config;
pub mod error;
pub mod memory;
pub mod storage;
pub mod timeline;

pub use config::{AppConfig, TimelineConfig};
pub use error::{Error, Result};

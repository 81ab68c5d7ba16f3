pub mod config;
pub mod error;

pub use config::{CONFIG_FILE, Config, ConfigStore, default_base_dir};
pub use error::{Result, StoreError};

mod loader;
mod types;

pub use loader::{ConfigError, MAX_BATCH_SIZE};
pub use types::{ApiConfig, Config, UiConfig};

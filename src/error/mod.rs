mod config;
mod storage;
mod theme;

pub use config::ConfigError;
pub use storage::StorageError;
pub use theme::ParseThemeError;

pub mod components;
pub mod configs;
pub mod content;
pub mod error;
pub mod storage;
pub mod utils;
pub mod views;
#[cfg(test)]
mod tests;

pub use crate::configs::AppConfig;
pub use crate::error::{ ConfigError, ParseThemeError, StorageError };
pub use crate::storage::{ KeyValueStore, ThemeStore, THEME_KEY };
pub use crate::utils::{ Theme, UiState };
pub use crate::views::PortfolioPage;

mod env_validate;

pub use env_validate::{ AppConfig, LOG_LEVEL_KEY, SETTINGS_PATH_KEY };

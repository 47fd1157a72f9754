use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Config Error: invalid value {:?} for {}", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

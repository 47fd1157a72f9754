use std::fmt::{ Display, Formatter };

#[derive(Debug)]
pub enum StorageError {
    Unavailable(String),
    Read(String),
    Write(String),
    Corrupt(String),
    IO(String),
}

impl StorageError {
    pub fn read(err: impl Display) -> Self {
        StorageError::Read(err.to_string())
    }

    pub fn write(err: impl Display) -> Self {
        StorageError::Write(err.to_string())
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Corrupt(msg) => write!(f, "Stored preferences are corrupt: {}", msg),
            StorageError::IO(msg) => write!(f, "I/O Error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::IO(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Corrupt(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for StorageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        StorageError::Unavailable(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: StorageError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, StorageError::IO(_)));
        assert_eq!(err.to_string(), "I/O Error: denied");
    }

    #[test]
    fn test_json_error_is_corrupt() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StorageError::from(json_err);
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}

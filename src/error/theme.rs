use std::fmt::{ Display, Formatter };

/// A stored theme value that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError(pub String);

impl Display for ParseThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme {:?}, expected \"light\" or \"dark\"", self.0)
    }
}

impl std::error::Error for ParseThemeError {}

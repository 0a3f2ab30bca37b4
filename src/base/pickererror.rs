use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PickerError {
    // Cookie Errors
    #[error("Invalid cookie line: {line}")]
    InvalidCookie { line: String },
    #[error("Cookie store unavailable")]
    StoreUnavailable,

    // Catalog Errors
    #[error("Catalog parse failed: {message}")]
    CatalogParse { message: String },
    #[error("Catalog read failed for {path}: {message}")]
    CatalogIo { path: String, message: String },
}

impl PickerError {
    /// Create an invalid cookie error for the offending assignment line.
    pub fn invalid_cookie(line: impl Into<String>) -> Self {
        Self::InvalidCookie { line: line.into() }
    }

    /// Create a catalog parse error.
    pub fn catalog_parse(message: impl Into<String>) -> Self {
        Self::CatalogParse {
            message: message.into(),
        }
    }

    /// Create a catalog I/O error.
    pub fn catalog_io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CatalogIo {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        PickerError::catalog_parse(err.to_string())
    }
}

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// This enum defines the errors that can be sent back to the frontend.
// Using `thiserror` makes it easy to convert from other error types,
// and `serde::Serialize` allows it to be returned in a command's `Err` variant.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgument(String),
    #[error("File does not exist: {0}")]
    NotFound(String),
    #[error("Failed to obtain a shareable handle: {0}")]
    HandleCreation(String),
    #[error("Failed to present the share dialog: {0}")]
    Presentation(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
    #[error("Tauri API error: {0}")]
    Tauri(#[from] tauri::Error),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_errors_convert_and_serialize_as_messages() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "socket gone");
        let err = Error::from(tauri::Error::from(io));
        assert!(matches!(err, Error::Tauri(_)));
        let serialized = serde_json::to_string(&err).unwrap();
        assert!(serialized.contains("Tauri API error"));
    }
}

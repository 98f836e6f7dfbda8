use crate::error::invalid_field::InvalidFieldError;
use crate::error::key_not_found::KeyNotFoundError;
use crate::error::missing_field::MissingFieldError;
use std::error::Error;
use std::fmt::{self, Display};

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug)]
pub enum ClientError {
    MissingField(MissingFieldError),
    KeyNotFound(KeyNotFoundError),
    InvalidField(InvalidFieldError),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
}

impl ClientError {
    pub fn missing_field<N>(field_name: N) -> Self
    where
        N: Into<String>,
    {
        ClientError::MissingField(MissingFieldError::new(field_name))
    }

    pub fn key_not_found<K>(key: K) -> Self
    where
        K: Into<String>,
    {
        ClientError::KeyNotFound(KeyNotFoundError::new(key))
    }

    pub fn invalid_field<N>(field_name: N, expected: &'static str) -> Self
    where
        N: Into<String>,
    {
        ClientError::InvalidField(InvalidFieldError::new(field_name, expected))
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::MissingField(e) => write!(f, "{}", e),
            ClientError::KeyNotFound(e) => write!(f, "{}", e),
            ClientError::InvalidField(e) => write!(f, "{}", e),
            ClientError::SerdeJson(e) => write!(f, "JSON error: {}", e),
            ClientError::SerdeYaml(e) => write!(f, "YAML error: {}", e),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::MissingField(e) => Some(e),
            ClientError::KeyNotFound(e) => Some(e),
            ClientError::InvalidField(e) => Some(e),
            ClientError::SerdeJson(e) => Some(e),
            ClientError::SerdeYaml(e) => Some(e),
        }
    }
}

impl From<MissingFieldError> for ClientError {
    fn from(error: MissingFieldError) -> Self {
        ClientError::MissingField(error)
    }
}

impl From<KeyNotFoundError> for ClientError {
    fn from(error: KeyNotFoundError) -> Self {
        ClientError::KeyNotFound(error)
    }
}

impl From<InvalidFieldError> for ClientError {
    fn from(error: InvalidFieldError) -> Self {
        ClientError::InvalidField(error)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::SerdeJson(error)
    }
}

impl From<serde_yaml::Error> for ClientError {
    fn from(error: serde_yaml::Error) -> Self {
        ClientError::SerdeYaml(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_field() {
        let err = ClientError::missing_field("config");
        assert_eq!(err.to_string(), "Missing required field 'config'");
    }

    #[test]
    fn test_display_key_not_found() {
        let err = ClientError::key_not_found("missing");
        assert_eq!(err.to_string(), "Extra field 'missing' not found");
    }

    #[test]
    fn test_display_invalid_field() {
        let err = ClientError::invalid_field("name", "a string");
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'name': expected a string"
        );
    }

    #[test]
    fn test_from_missing_field_error() {
        let err: ClientError = MissingFieldError::new("name").into();
        match err {
            ClientError::MissingField(e) => assert_eq!(e.field_name, "name"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_source_is_inner_error() {
        let err = ClientError::key_not_found("foo");
        assert!(err.source().is_some());
    }
}

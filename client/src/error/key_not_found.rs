use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct KeyNotFoundError {
    pub key: String,
}

impl KeyNotFoundError {
    pub fn new<K>(key: K) -> Self
    where
        K: Into<String>,
    {
        KeyNotFoundError { key: key.into() }
    }
}

impl Error for KeyNotFoundError {}

impl Display for KeyNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Extra field '{}' not found", self.key)
    }
}

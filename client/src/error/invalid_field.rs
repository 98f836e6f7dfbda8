use std::error::Error;
use std::fmt::{self, Display};

/// A required field was present but its value could not be read as the
/// expected type.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidFieldError {
    pub field_name: String,
    pub expected: &'static str,
}

impl InvalidFieldError {
    pub fn new<N>(field_name: N, expected: &'static str) -> Self
    where
        N: Into<String>,
    {
        InvalidFieldError {
            field_name: field_name.into(),
            expected,
        }
    }
}

impl Error for InvalidFieldError {}

impl Display for InvalidFieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid value for field '{}': expected {}",
            self.field_name, self.expected
        )
    }
}

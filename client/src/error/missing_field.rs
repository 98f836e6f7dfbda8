use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct MissingFieldError {
    pub field_name: String,
}

impl MissingFieldError {
    pub fn new<N>(field_name: N) -> Self
    where
        N: Into<String>,
    {
        MissingFieldError {
            field_name: field_name.into(),
        }
    }
}

impl Error for MissingFieldError {}

impl Display for MissingFieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Missing required field '{}'", self.field_name)
    }
}

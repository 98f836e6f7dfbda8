pub mod error;
pub mod invalid_field;
pub mod key_not_found;
pub mod missing_field;

pub use error::{ClientError, ClientResult};

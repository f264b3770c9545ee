mod sdk_error;

pub use sdk_error::{ErrorKind, SdkError, SdkResult, ValidationFieldError};

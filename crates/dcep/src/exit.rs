use std::fmt;
use std::io;

use dcep_message::MessageError;

// Exit code constants aligned with rsfulmen/DDR-0002 semantics.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn message_error(context: &str, err: MessageError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn hex_error(context: &str, err: hex::FromHexError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_errors_map_to_data_invalid() {
        let err = message_error("decode failed", MessageError::HeaderTooShort { len: 2 });
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(
            err.to_string(),
            "decode failed: channel open header too short (2 bytes, need 12)"
        );
    }

    #[test]
    fn io_errors_map_by_kind() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(io_error("read", denied).code, PERMISSION_DENIED);

        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(io_error("read", missing).code, FAILURE);

        let other = io::Error::other("boom");
        assert_eq!(io_error("read", other).code, INTERNAL);
    }
}

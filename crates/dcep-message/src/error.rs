use std::fmt;

/// The variable-length field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Label,
    Protocol,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Label => f.write_str("label"),
            Field::Protocol => f.write_str("protocol"),
        }
    }
}

/// Errors that can occur during channel-open encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    /// The input is shorter than the fixed header.
    #[error("channel open header too short ({len} bytes, need 12)")]
    HeaderTooShort { len: usize },

    /// The declared label and protocol lengths do not add up to the input length.
    #[error("channel open length mismatch (header declares {expected} bytes, got {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    /// A label or protocol does not fit in its 16-bit length field.
    #[error("{field} too large ({size} bytes, max {max})")]
    FieldTooLarge {
        field: Field,
        size: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, MessageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let err = MessageError::FieldTooLarge {
            field: Field::Protocol,
            size: 70_000,
            max: 65_535,
        };
        assert_eq!(err.to_string(), "protocol too large (70000 bytes, max 65535)");
    }

    #[test]
    fn test_display_reports_lengths() {
        let err = MessageError::LengthMismatch {
            expected: 17,
            actual: 16,
        };
        assert_eq!(
            err.to_string(),
            "channel open length mismatch (header declares 17 bytes, got 16)"
        );

        let err = MessageError::HeaderTooShort { len: 3 };
        assert_eq!(err.to_string(), "channel open header too short (3 bytes, need 12)");
    }
}

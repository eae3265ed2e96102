//! Registered channel type values.
//!
//! The codec carries the channel type as an opaque byte. These constants only
//! exist so callers and tooling can name the registered values; unknown bytes
//! are passed through untouched.

/// Reliable, ordered delivery.
pub const RELIABLE: u8 = 0x00;

/// Reliable, unordered delivery.
pub const RELIABLE_UNORDERED: u8 = 0x80;

/// Partially reliable, limited by retransmission count.
pub const PARTIAL_RELIABLE_REXMIT: u8 = 0x01;

/// Partially reliable by retransmission count, unordered.
pub const PARTIAL_RELIABLE_REXMIT_UNORDERED: u8 = 0x81;

/// Partially reliable, limited by lifetime in milliseconds.
pub const PARTIAL_RELIABLE_TIMED: u8 = 0x02;

/// Partially reliable by lifetime, unordered.
pub const PARTIAL_RELIABLE_TIMED_UNORDERED: u8 = 0x82;

const UNORDERED_BIT: u8 = 0x80;

/// Returns a human-readable name for a channel type byte.
pub fn channel_type_name(channel_type: u8) -> &'static str {
    match channel_type {
        RELIABLE => "RELIABLE",
        RELIABLE_UNORDERED => "RELIABLE_UNORDERED",
        PARTIAL_RELIABLE_REXMIT => "PARTIAL_RELIABLE_REXMIT",
        PARTIAL_RELIABLE_REXMIT_UNORDERED => "PARTIAL_RELIABLE_REXMIT_UNORDERED",
        PARTIAL_RELIABLE_TIMED => "PARTIAL_RELIABLE_TIMED",
        PARTIAL_RELIABLE_TIMED_UNORDERED => "PARTIAL_RELIABLE_TIMED_UNORDERED",
        _ => "UNKNOWN",
    }
}

/// Returns true if the channel type has the unordered bit set.
pub fn is_unordered(channel_type: u8) -> bool {
    channel_type & UNORDERED_BIT != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_registered_values() {
        assert_eq!(channel_type_name(RELIABLE), "RELIABLE");
        assert_eq!(
            channel_type_name(PARTIAL_RELIABLE_TIMED_UNORDERED),
            "PARTIAL_RELIABLE_TIMED_UNORDERED"
        );
        assert_eq!(channel_type_name(0x7f), "UNKNOWN");
    }

    #[test]
    fn unordered_bit() {
        assert!(is_unordered(RELIABLE_UNORDERED));
        assert!(is_unordered(PARTIAL_RELIABLE_REXMIT_UNORDERED));
        assert!(!is_unordered(RELIABLE));
        assert!(!is_unordered(PARTIAL_RELIABLE_TIMED));
    }
}

//! Message type tag carried in the first byte of every control message.

/// DATA_CHANNEL_OPEN.
pub const CHANNEL_OPEN: u8 = 0x03;

//! Wire codec for the DATA_CHANNEL_OPEN control message.
//!
//! A channel-open message proposes a new bidirectional data channel. It has a
//! fixed 12-byte big-endian header followed by the label and protocol bytes:
//! - 1-byte message type tag, 1-byte channel type
//! - 2-byte priority, 4-byte reliability parameter
//! - 2-byte label length, 2-byte protocol length
//!
//! Decoding borrows the label and protocol from the input buffer. Use
//! [`decode_channel_open_bytes`] or [`ChannelOpen::to_buf`] when the message
//! must outlive it.

pub mod channel_type;
pub mod codec;
pub mod error;
pub mod message;
pub mod message_type;

pub use channel_type::{channel_type_name, is_unordered};
pub use codec::{
    decode_channel_open, decode_channel_open_bytes, encode_channel_open, marshal, HEADER_SIZE,
    MAX_FIELD_LEN,
};
pub use error::{Field, MessageError, Result};
pub use message::{ChannelOpen, ChannelOpenBuf};
pub use message_type::CHANNEL_OPEN;

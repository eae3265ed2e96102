//! Codec for the data channel DATA_CHANNEL_OPEN message.
//!
//! This crate re-exports [`dcep_message`] and ships the `dcep` CLI (behind the
//! default `cli` feature) for encoding and inspecting channel-open messages.
//!
//! ```
//! use dcep::message::{decode_channel_open, marshal, ChannelOpen};
//!
//! let raw = marshal(&ChannelOpen::new(b"chat", b"").with_priority(0x1234)).unwrap();
//! let msg = decode_channel_open(&raw).unwrap();
//! assert_eq!(msg.label, b"chat");
//! ```

/// Re-export message types.
pub mod message {
    pub use dcep_message::*;
}

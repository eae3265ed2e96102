use bytes::Bytes;

use crate::codec::HEADER_SIZE;

/// A DATA_CHANNEL_OPEN message.
///
/// `label` and `protocol` are borrowed. A message returned by
/// [`decode_channel_open`](crate::decode_channel_open) points into the input
/// buffer, which therefore stays borrowed for as long as the message lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelOpen<'a> {
    /// Channel type byte. Opaque to the codec.
    pub channel_type: u8,
    /// Transport priority hint.
    pub priority: u16,
    /// Meaning depends on `channel_type`.
    pub reliability_parameter: u32,
    /// Channel name. Not required to be UTF-8.
    pub label: &'a [u8],
    /// Sub-protocol identifier. Not required to be UTF-8.
    pub protocol: &'a [u8],
}

impl<'a> ChannelOpen<'a> {
    /// Create a reliable, ordered channel-open with zero priority.
    pub fn new(label: &'a [u8], protocol: &'a [u8]) -> Self {
        Self {
            label,
            protocol,
            ..Self::default()
        }
    }

    pub fn with_channel_type(mut self, channel_type: u8) -> Self {
        self.channel_type = channel_type;
        self
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_reliability_parameter(mut self, reliability_parameter: u32) -> Self {
        self.reliability_parameter = reliability_parameter;
        self
    }

    /// The total wire size of this message (header + label + protocol).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.label.len() + self.protocol.len()
    }

    /// Copy the label and protocol into an owned message.
    pub fn to_buf(&self) -> ChannelOpenBuf {
        ChannelOpenBuf {
            channel_type: self.channel_type,
            priority: self.priority,
            reliability_parameter: self.reliability_parameter,
            label: Bytes::copy_from_slice(self.label),
            protocol: Bytes::copy_from_slice(self.protocol),
        }
    }
}

/// An owned DATA_CHANNEL_OPEN message.
///
/// When produced by [`decode_channel_open_bytes`](crate::decode_channel_open_bytes)
/// the label and protocol share the input allocation instead of copying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelOpenBuf {
    pub channel_type: u8,
    pub priority: u16,
    pub reliability_parameter: u32,
    pub label: Bytes,
    pub protocol: Bytes,
}

impl ChannelOpenBuf {
    /// Borrow this message as a [`ChannelOpen`] view, e.g. for encoding.
    pub fn as_view(&self) -> ChannelOpen<'_> {
        ChannelOpen {
            channel_type: self.channel_type,
            priority: self.priority,
            reliability_parameter: self.reliability_parameter,
            label: self.label.as_ref(),
            protocol: self.protocol.as_ref(),
        }
    }

    pub fn wire_size(&self) -> usize {
        self.as_view().wire_size()
    }
}

impl From<ChannelOpen<'_>> for ChannelOpenBuf {
    fn from(msg: ChannelOpen<'_>) -> Self {
        msg.to_buf()
    }
}

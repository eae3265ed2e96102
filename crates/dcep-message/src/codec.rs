use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Field, MessageError, Result};
use crate::message::{ChannelOpen, ChannelOpenBuf};
use crate::message_type::CHANNEL_OPEN;

/// Fixed header: tag (1) + channel type (1) + priority (2) + reliability (4)
/// + label length (2) + protocol length (2) = 12 bytes.
pub const HEADER_SIZE: usize = 12;

/// Largest label or protocol representable in a 16-bit length field.
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;

const OFFSET_CHANNEL_TYPE: usize = 1;
const OFFSET_PRIORITY: usize = 2;
const OFFSET_RELIABILITY: usize = 4;
const OFFSET_LABEL_LENGTH: usize = 8;
const OFFSET_PROTOCOL_LENGTH: usize = 10;

/// Encode a channel-open message into the wire format.
///
/// Wire format (all integers big-endian):
/// ```text
///  0               1               2               3
/// ┌───────────────┬───────────────┬───────────────────────────────┐
/// │ Message Type  │ Channel Type  │ Priority                      │
/// ├───────────────┴───────────────┴───────────────────────────────┤
/// │ Reliability Parameter                                         │
/// ├───────────────────────────────┬───────────────────────────────┤
/// │ Label Length                  │ Protocol Length               │
/// ├───────────────────────────────┴───────────────────────────────┤
/// │ Label (Label Length bytes)                                    │
/// ├───────────────────────────────────────────────────────────────┤
/// │ Protocol (Protocol Length bytes)                              │
/// └───────────────────────────────────────────────────────────────┘
/// ```
///
/// Appends exactly [`ChannelOpen::wire_size`] bytes to `dst`. Nothing is
/// written if the label or protocol is too large.
pub fn encode_channel_open(msg: &ChannelOpen<'_>, dst: &mut BytesMut) -> Result<()> {
    let label_len = field_len(Field::Label, msg.label)?;
    let protocol_len = field_len(Field::Protocol, msg.protocol)?;

    dst.reserve(msg.wire_size());
    dst.put_u8(CHANNEL_OPEN);
    dst.put_u8(msg.channel_type);
    dst.put_u16(msg.priority);
    dst.put_u32(msg.reliability_parameter);
    dst.put_u16(label_len);
    dst.put_u16(protocol_len);
    dst.put_slice(msg.label);
    dst.put_slice(msg.protocol);
    Ok(())
}

/// Encode a channel-open message into a new buffer.
pub fn marshal(msg: &ChannelOpen<'_>) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(msg.wire_size());
    encode_channel_open(msg, &mut buf)?;
    Ok(buf.freeze())
}

/// Decode a channel-open message, borrowing label and protocol from `raw`.
///
/// `raw` must hold exactly one message: the header's declared lengths must
/// account for every byte after it. The message type tag at offset 0 is not
/// checked; routing on it is the caller's job.
pub fn decode_channel_open(raw: &[u8]) -> Result<ChannelOpen<'_>> {
    if raw.len() < HEADER_SIZE {
        return Err(MessageError::HeaderTooShort { len: raw.len() });
    }

    let channel_type = raw[OFFSET_CHANNEL_TYPE];
    let priority = (&raw[OFFSET_PRIORITY..]).get_u16();
    let reliability_parameter = (&raw[OFFSET_RELIABILITY..]).get_u32();
    let label_len = (&raw[OFFSET_LABEL_LENGTH..]).get_u16() as usize;
    let protocol_len = (&raw[OFFSET_PROTOCOL_LENGTH..]).get_u16() as usize;

    let label_end = HEADER_SIZE + label_len;
    let expected = label_end + protocol_len;
    if raw.len() != expected {
        return Err(MessageError::LengthMismatch {
            expected,
            actual: raw.len(),
        });
    }

    Ok(ChannelOpen {
        channel_type,
        priority,
        reliability_parameter,
        label: &raw[HEADER_SIZE..label_end],
        protocol: &raw[label_end..expected],
    })
}

/// Decode a channel-open message from a shared buffer.
///
/// Same validation as [`decode_channel_open`]; the returned label and
/// protocol are reference-counted slices of `raw`, not copies.
pub fn decode_channel_open_bytes(raw: &Bytes) -> Result<ChannelOpenBuf> {
    let view = decode_channel_open(raw)?;
    let label_end = HEADER_SIZE + view.label.len();
    let end = label_end + view.protocol.len();

    Ok(ChannelOpenBuf {
        channel_type: view.channel_type,
        priority: view.priority,
        reliability_parameter: view.reliability_parameter,
        label: raw.slice(HEADER_SIZE..label_end),
        protocol: raw.slice(label_end..end),
    })
}

fn field_len(field: Field, data: &[u8]) -> Result<u16> {
    u16::try_from(data.len()).map_err(|_| MessageError::FieldTooLarge {
        field,
        size: data.len(),
        max: MAX_FIELD_LEN,
    })
}

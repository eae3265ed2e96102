//! Encode a channel-open message, then decode it both as a borrowed view and
//! as an owned message that outlives the receive buffer.
//!
//! Run with: `cargo run --example channel-open`

use dcep::message::channel_type::PARTIAL_RELIABLE_REXMIT;
use dcep::message::{
    channel_type_name, decode_channel_open, decode_channel_open_bytes, marshal, ChannelOpen,
    ChannelOpenBuf, MessageError,
};

fn main() -> Result<(), MessageError> {
    let outgoing = ChannelOpen::new(b"chat", b"json-rpc")
        .with_channel_type(PARTIAL_RELIABLE_REXMIT)
        .with_priority(256)
        .with_reliability_parameter(3);
    let wire = marshal(&outgoing)?;
    println!("encoded {} bytes", wire.len());

    let view = decode_channel_open(&wire)?;
    println!(
        "borrowed: label={:?} protocol={:?} type={} retransmits={}",
        String::from_utf8_lossy(view.label),
        String::from_utf8_lossy(view.protocol),
        channel_type_name(view.channel_type),
        view.reliability_parameter
    );

    let owned: ChannelOpenBuf = decode_channel_open_bytes(&wire)?;
    drop(wire);
    println!("owned: label={:?}", String::from_utf8_lossy(&owned.label));

    match decode_channel_open(&[0x03, 0x00]) {
        Err(err) => println!("rejected: {err}"),
        Ok(_) => unreachable!("two bytes cannot hold a header"),
    }

    Ok(())
}

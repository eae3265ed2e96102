use bytes::BytesMut;
use dcep_message::{encode_channel_open, ChannelOpen};

use crate::cmd::EncodeArgs;
use crate::exit::{message_error, CliResult, SUCCESS};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let msg = ChannelOpen::new(args.label.as_bytes(), args.protocol.as_bytes())
        .with_channel_type(args.channel_type)
        .with_priority(args.priority)
        .with_reliability_parameter(args.reliability);

    let mut buf = BytesMut::with_capacity(msg.wire_size());
    encode_channel_open(&msg, &mut buf).map_err(|err| message_error("encode failed", err))?;
    tracing::debug!(
        wire_size = buf.len(),
        label_len = msg.label.len(),
        protocol_len = msg.protocol.len(),
        "encoded channel open"
    );

    print_encoded(&buf, format);
    Ok(SUCCESS)
}

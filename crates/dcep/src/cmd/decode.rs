use std::fs;

use bytes::Bytes;
use dcep_message::decode_channel_open_bytes;

use crate::cmd::DecodeArgs;
use crate::exit::{hex_error, io_error, message_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_decoded, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let raw = resolve_input(&args)?;
    tracing::debug!(len = raw.len(), "decoding channel open");

    let msg = decode_channel_open_bytes(&raw).map_err(|err| {
        tracing::warn!(len = raw.len(), error = %err, "rejected channel open");
        message_error("decode failed", err)
    })?;

    print_decoded(&msg, format);
    Ok(SUCCESS)
}

fn resolve_input(args: &DecodeArgs) -> CliResult<Bytes> {
    if let Some(text) = &args.hex {
        return parse_hex(text);
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map(Bytes::from)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(USAGE, "either a hex string or --file is required"))
}

fn parse_hex(text: &str) -> CliResult<Bytes> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact)
        .map(Bytes::from)
        .map_err(|err| hex_error("invalid hex input", err))
}

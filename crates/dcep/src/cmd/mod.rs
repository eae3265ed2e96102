use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a channel-open message.
    Encode(EncodeArgs),
    /// Decode and print a channel-open message.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Channel label.
    #[arg(long, default_value = "")]
    pub label: String,
    /// Sub-protocol name.
    #[arg(long, default_value = "")]
    pub protocol: String,
    /// Channel type byte (decimal or 0x-prefixed hex).
    #[arg(long, default_value = "0", value_parser = parse_u8)]
    pub channel_type: u8,
    /// Priority (decimal or 0x-prefixed hex).
    #[arg(long, default_value = "0", value_parser = parse_u16)]
    pub priority: u16,
    /// Reliability parameter (decimal or 0x-prefixed hex).
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    pub reliability: u32,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Message as a hex string. Whitespace is ignored.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read the raw message from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_number(input: &str) -> Result<u64, String> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => input.parse(),
    };
    parsed.map_err(|_| format!("invalid number: {input}"))
}

fn parse_u8(input: &str) -> Result<u8, String> {
    let value = parse_number(input)?;
    u8::try_from(value).map_err(|_| format!("{value} does not fit in 8 bits"))
}

fn parse_u16(input: &str) -> Result<u16, String> {
    let value = parse_number(input)?;
    u16::try_from(value).map_err(|_| format!("{value} does not fit in 16 bits"))
}

fn parse_u32(input: &str) -> Result<u32, String> {
    let value = parse_number(input)?;
    u32::try_from(value).map_err(|_| format!("{value} does not fit in 32 bits"))
}

use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use dcep_message::{channel_type_name, is_unordered, ChannelOpenBuf, CHANNEL_OPEN};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct EncodedOutput {
    message_type: u8,
    wire_size: usize,
    hex: String,
}

#[derive(Serialize)]
struct DecodedOutput {
    channel_type: u8,
    channel_type_name: &'static str,
    unordered: bool,
    priority: u16,
    reliability_parameter: u32,
    label: String,
    label_hex: String,
    protocol: String,
    protocol_hex: String,
    wire_size: usize,
}

impl DecodedOutput {
    fn new(msg: &ChannelOpenBuf) -> Self {
        Self {
            channel_type: msg.channel_type,
            channel_type_name: channel_type_name(msg.channel_type),
            unordered: is_unordered(msg.channel_type),
            priority: msg.priority,
            reliability_parameter: msg.reliability_parameter,
            label: field_preview(msg.label.as_ref()),
            label_hex: hex::encode(&msg.label),
            protocol: field_preview(msg.protocol.as_ref()),
            protocol_hex: hex::encode(&msg.protocol),
            wire_size: msg.wire_size(),
        }
    }
}

pub fn print_encoded(raw: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                message_type: CHANNEL_OPEN,
                wire_size: raw.len(),
                hex: hex::encode(raw),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SIZE", "HEX"])
                .add_row(vec![raw.len().to_string(), hex::encode(raw)]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{}", hex::encode(raw));
        }
        OutputFormat::Raw => {
            print_raw(raw);
        }
    }
}

pub fn print_decoded(msg: &ChannelOpenBuf, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = DecodedOutput::new(msg);
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let out = DecodedOutput::new(msg);
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    "CHANNEL TYPE",
                    "PRIORITY",
                    "RELIABILITY",
                    "LABEL",
                    "PROTOCOL",
                    "SIZE",
                ])
                .add_row(vec![
                    format!("0x{:02x} ({})", out.channel_type, out.channel_type_name),
                    out.priority.to_string(),
                    out.reliability_parameter.to_string(),
                    out.label,
                    out.protocol,
                    out.wire_size.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "channel_type=0x{:02x} ({}) priority={} reliability={} label={} protocol={} size={}",
                msg.channel_type,
                channel_type_name(msg.channel_type),
                msg.priority,
                msg.reliability_parameter,
                field_preview(msg.label.as_ref()),
                field_preview(msg.protocol.as_ref()),
                msg.wire_size()
            );
        }
        OutputFormat::Raw => {
            print_raw(msg.label.as_ref());
            print_raw(msg.protocol.as_ref());
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn field_preview(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<binary {} bytes>", data.len()),
    }
}

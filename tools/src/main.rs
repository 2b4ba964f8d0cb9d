use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::CodecLimits;
use devproto_tools::{
    decode_payload, describe_catalog, format_catalog_pretty, format_decode_pretty,
    format_inspect_pretty, inspect_frame,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "devproto-tools",
    version,
    about = "devproto frame inspection and decoding tools"
)]
struct Cli {
    /// Reject bytes left over after the payload.
    #[arg(long, global = true)]
    strict: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a frame: 14-byte header followed by its payload.
    Inspect {
        /// Path to the frame bytes.
        frame_path: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Decode a bare payload for a command id.
    Decode {
        /// Command id, decimal or 0x-prefixed hex.
        #[arg(long, value_parser = parse_command_id)]
        command_id: u8,
        /// Path to the payload bytes.
        payload_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List every record layout.
    Catalog {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let limits = if cli.strict {
        CodecLimits::default().strict()
    } else {
        CodecLimits::default()
    };

    match cli.command {
        Command::Inspect { frame_path, format } => {
            let bytes = read_file(&frame_path)?;
            let report = inspect_frame(&bytes, &limits)
                .with_context(|| format!("inspect {}", frame_path.display()))?;
            match format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Pretty => print!("{}", format_inspect_pretty(&report)),
            }
        }
        Command::Decode {
            command_id,
            payload_file,
            format,
        } => {
            let bytes = read_file(&payload_file)?;
            let report = decode_payload(command_id, &bytes, &limits)
                .with_context(|| format!("decode {}", payload_file.display()))?;
            match format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Pretty => print!("{}", format_decode_pretty(&report)),
            }
        }
        Command::Catalog { format } => {
            let catalog = describe_catalog();
            match format {
                OutputFormat::Json => print_json(&catalog)?,
                OutputFormat::Pretty => print!("{}", format_catalog_pretty(&catalog)),
            }
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{json}");
    Ok(())
}

fn parse_command_id(raw: &str) -> Result<u8, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|err| format!("invalid command id {raw:?}: {err}"))
}

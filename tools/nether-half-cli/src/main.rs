//! nether-half - packed16 inspection and conversion tool
//!
//! Shows how f32 values land in the packed16 format and converts raw f32
//! buffers to packed16 streams (.f16) and back.

use anyhow::Result;
use clap::{Parser, Subcommand};
use nether_half::ByteOrder;
use std::path::PathBuf;

use nether_half_cli::config::{DisplayFormat, HalfConfig};
use nether_half_cli::inspect::{Inspection, parse_bits};
use nether_half_cli::stream::{self, PACKED_EXT, RAW_EXT};

#[derive(Parser)]
#[command(name = "nether-half")]
#[command(about = "Nethercore packed16 half-float tool")]
#[command(version)]
struct Cli {
    /// Path to nether-half.toml (default: ./nether-half.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bit pattern display format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<DisplayFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode f32 values and show the packed result
    ///
    /// Negative numbers can be passed directly. Put `--` before the values to
    /// pass -inf or -nan, e.g. `nether-half encode -- 1.5 -inf`.
    Encode {
        /// Values to encode (e.g. 1.5 -0 inf -- -inf nan 1e30)
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f32>,
    },

    /// Decode packed16 bit patterns
    Decode {
        /// Patterns as 0x hex, 0b binary, or decimal
        #[arg(required = true)]
        bits: Vec<String>,
    },

    /// Convert a little-endian f32 file to a packed16 stream
    Pack {
        /// Input raw f32 file
        input: PathBuf,

        /// Output .f16 file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stream byte order: little or big (overrides config)
        #[arg(short, long)]
        byte_order: Option<ByteOrder>,
    },

    /// Convert a packed16 stream to a little-endian f32 file
    Unpack {
        /// Input .f16 file
        input: PathBuf,

        /// Output .f32 file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stream byte order: little or big (overrides config)
        #[arg(short, long)]
        byte_order: Option<ByteOrder>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = HalfConfig::discover(cli.config.as_deref(), &cwd)?;
    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Commands::Encode { values } => {
            for value in values {
                println!("{}", Inspection::from_value(value).render(format));
            }
        }

        Commands::Decode { bits } => {
            for text in bits {
                let bits = parse_bits(&text)?;
                println!("{}", Inspection::from_bits(bits).render(format));
            }
        }

        Commands::Pack {
            input,
            output,
            byte_order,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension(PACKED_EXT));
            let order = byte_order.unwrap_or(config.output.byte_order);
            tracing::info!("Packing {:?} -> {:?}", input, output);
            let count = stream::pack_file(&input, &output, order)?;
            tracing::info!("Done! {} values", count);
        }

        Commands::Unpack {
            input,
            output,
            byte_order,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension(RAW_EXT));
            let order = byte_order.unwrap_or(config.output.byte_order);
            tracing::info!("Unpacking {:?} -> {:?}", input, output);
            let count = stream::unpack_file(&input, &output, order)?;
            tracing::info!("Done! {} values", count);
        }
    }

    Ok(())
}

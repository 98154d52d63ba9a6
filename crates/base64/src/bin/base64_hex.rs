//! `base64-hex`: encode hex-given bytes as base64 and decode them back.
//!
//! Usage:
//!   base64-hex [--chunked] <HEX>
//!
//! Set `RUST_LOG=debug` to trace each stage.

use clap::Parser;
use mime_base64::cli::round_trip_hex;
use mime_base64::Base64;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "base64-hex", version, about)]
struct Args {
    /// Bytes to encode, as a hex string (e.g. `4d616e`).
    hex: String,

    /// Wrap base64 output at 76 characters.
    #[arg(long, env = "BASE64_CHUNKED")]
    chunked: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let codec = if args.chunked {
        Base64::chunked()
    } else {
        Base64::new()
    };

    match round_trip_hex(&args.hex, &codec) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

//! Trivium CLI - command line front end for the keystream core.
//!
//! Accepts hex-encoded key, IV, and data, and prints hex (or JSON) output.
//! All marshaling lives here; the cipher core only sees byte buffers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use trivium_cipher::{keystream, xor};

#[derive(Parser)]
#[command(name = "trivium")]
#[command(about = "Trivium keystream generation and XOR encryption")]
#[command(version)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit results as JSON instead of bare hex.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a keystream of the given length.
    Keystream {
        /// Hex-encoded key (padded or truncated to 10 bytes).
        #[arg(short, long)]
        key: String,

        /// Hex-encoded IV (padded or truncated to 10 bytes).
        #[arg(short, long)]
        iv: String,

        /// Number of keystream bytes to produce.
        #[arg(short, long)]
        length: i64,
    },

    /// XOR data with the keystream (encrypts and decrypts).
    Apply {
        /// Hex-encoded key (padded or truncated to 10 bytes).
        #[arg(short, long)]
        key: String,

        /// Hex-encoded IV (padded or truncated to 10 bytes).
        #[arg(short, long)]
        iv: String,

        /// Hex-encoded input data.
        data: String,
    },
}

#[derive(Serialize)]
struct Output<'a> {
    operation: &'a str,
    bytes: usize,
    hex: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to initialize logging")?;

    let (operation, out) = match &cli.command {
        Commands::Keystream { key, iv, length } => {
            let key = hex::decode(key).context("Invalid hex in --key")?;
            let iv = hex::decode(iv).context("Invalid hex in --iv")?;
            debug!(length = *length, "generating keystream");
            ("keystream", keystream(&key, &iv, *length)?)
        }
        Commands::Apply { key, iv, data } => {
            let key = hex::decode(key).context("Invalid hex in --key")?;
            let iv = hex::decode(iv).context("Invalid hex in --iv")?;
            let data = hex::decode(data).context("Invalid hex in data")?;
            debug!(bytes = data.len(), "applying keystream");
            ("apply", xor(&key, &iv, &data))
        }
    };

    let encoded = hex::encode(&out);
    if cli.json {
        let payload = Output {
            operation,
            bytes: out.len(),
            hex: encoded,
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{encoded}");
    }

    Ok(())
}

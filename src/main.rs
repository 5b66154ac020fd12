//! teafile – TEA file encryptor/decryptor
//!
//! 64-bit blocks, 128-bit key derived from the first 16 bytes of the key
//! string, 32 rounds, ECB with PKCS#5-style padding. No MAC: the padding
//! check on decrypt is the only wrong-key signal, and a failed check is a
//! warning, not an error.

mod block;
mod key;
mod padding;
mod pipeline;
mod tea;

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rpassword::prompt_password;
use zeroize::Zeroizing;

use crate::key::{TeaKey, MIN_KEY_LEN};
use crate::pipeline::{Mode, Outcome};

/* ---------------------------------- CLI ---------------------------------- */

#[derive(Parser)]
#[command(author, version, about, disable_help_subcommand = true)]
struct Cli {
    #[arg(value_enum)]
    mode: CliMode,

    /// File to read
    input: PathBuf,

    /// File to write
    output: PathBuf,

    /// Key string, at least 16 bytes (prompted when omitted)
    #[arg(short, long)]
    key: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CliMode {
    Encrypt,
    Decrypt,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let key_str: Zeroizing<String> = Zeroizing::new(match cli.key {
        Some(k) => k,
        None => prompt_password("Enter key: ").context("reading key")?,
    });
    if key_str.len() < MIN_KEY_LEN {
        bail!(
            "key must be at least {MIN_KEY_LEN} bytes, got {}",
            key_str.len()
        );
    }
    let key = TeaKey::derive(key_str.as_bytes());

    let mode = match cli.mode {
        CliMode::Encrypt => Mode::Encrypt,
        CliMode::Decrypt => Mode::Decrypt,
    };

    match pipeline::process_file(&cli.input, &cli.output, &key, mode)? {
        Outcome::Clean => {
            println!(
                "{} '{}' -> '{}'",
                match mode {
                    Mode::Encrypt => "encrypted",
                    Mode::Decrypt => "decrypted",
                },
                cli.input.display(),
                cli.output.display()
            );
        }
        Outcome::PaddingMismatch(e) => {
            eprintln!(
                "Warning: {e}; wrong key? Raw decrypted bytes kept in '{}'",
                cli.output.display()
            );
        }
    }
    Ok(())
}

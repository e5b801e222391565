//! Command-line front end for the wirecode codecs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use wirecode::{ExchangeId, WordList, code, qr};

#[derive(Parser)]
#[command(name = "wirecode", about = "Human-typable exchange codes and QR symbols")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random identifier and print its human code
    New,
    /// Decode a human code back to its identifier
    Decode {
        /// The code to decode, in any tolerated spelling
        code: String,
    },
    /// Render text as a version 1-L QR symbol
    Qr {
        /// Text to encode (alphanumeric mode: 0-9 A-Z space $%*+-./:)
        text: String,
        /// Module size in pixels
        #[arg(long, default_value_t = 6)]
        scale: usize,
        /// Output file; .png renders a raster, anything else SVG.
        /// Omit to print SVG to stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let words = WordList::builtin();

    match cli.command {
        Command::New => {
            let id = ExchangeId::random();
            println!("id:   {id}");
            println!("code: {}", code::encode(&id, words));
        }
        Command::Decode { code: input } => {
            let decoded = code::decode(&input, words)
                .map_err(|reason| anyhow::anyhow!("{reason}"))
                .with_context(|| format!("could not decode {input:?}"))?;
            println!("id:       {}", decoded.id);
            println!("code:     {}", code::format_code(&decoded.normalized));
            println!("checksum: {}", if decoded.checksum_present { "verified" } else { "absent" });
        }
        Command::Qr { text, scale, out } => {
            if scale == 0 {
                bail!("--scale must be at least 1");
            }
            match out {
                Some(path) if path.extension().is_some_and(|e| e == "png") => {
                    let img = qr::to_image(&text, scale)?;
                    img.save(&path)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                }
                Some(path) => {
                    let svg = qr::to_svg(&text, scale)?;
                    fs::write(&path, svg)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                }
                None => println!("{}", qr::to_svg(&text, scale)?),
            }
        }
    }

    Ok(())
}

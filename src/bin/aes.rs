use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use log::info;
use rand::rngs::OsRng;

use blockcrypt::codec;
use blockcrypt::encryption::{Action, Mode};
use blockcrypt::keys::AesKey;

#[derive(Parser, Debug)]
#[command(name = "aes", version, about = "Encrypt or decrypt a file with AES-128/192/256")]
#[command(group(ArgGroup::new("action").required(true).args(["encrypt", "decrypt"])))]
struct Args {
    /// Encrypt INPUT into OUTPUT
    #[arg(short, long)]
    encrypt: bool,

    /// Decrypt INPUT into OUTPUT
    #[arg(short, long)]
    decrypt: bool,

    /// 32/48/64 hex digits or 16/24/32 characters (optionally 'quoted')
    #[arg(allow_hyphen_values = true)]
    key: AesKey,

    /// ecb or cbc
    mode: Mode,

    input: PathBuf,

    output: PathBuf,
}

impl Args {
    fn action(&self) -> Action {
        match (self.encrypt, self.decrypt) {
            (true, _) => Action::Encrypt,
            (_, true) => Action::Decrypt,
            _ => unreachable!("clap requires one of --encrypt or --decrypt"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut data = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let start = Instant::now();

    let range = match args.action() {
        Action::Encrypt => {
            data = codec::seal_aes(&data, &args.key, args.mode, &mut OsRng)?;
            0..data.len()
        }
        Action::Decrypt => codec::open_in_place(&mut data, &args.key, args.mode)
            .with_context(|| format!("failed to decrypt {}", args.input.display()))?,
    };

    info!(
        "AES-{} {} {} bytes in {:.3}s",
        args.key.bits(),
        args.mode,
        range.len(),
        start.elapsed().as_secs_f64()
    );

    fs::write(&args.output, &data[range])
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::debug;

use blockcrypt::hash::sha512::core::{Sha512State, sha512_partial};
use blockcrypt::hash::sha512::{BLOCK_SIZE, DIGEST_SIZE, format_digest};

/// 128 SHA-512 blocks per read.
const CHUNK_SIZE: usize = 128 * BLOCK_SIZE;

#[derive(Parser, Debug)]
#[command(name = "sha512sum", version, about = "Print SHA-512 digests of files")]
struct Args {
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Reads until `buf` is full or the reader is exhausted.
fn fill(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn hash_file(path: &Path) -> Result<[u8; DIGEST_SIZE]> {
    let mut file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut state = Sha512State::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = fill(&mut file, &mut buf)
            .with_context(|| format!("failed to read {}", path.display()))?;
        total += n as u64;

        if n < CHUNK_SIZE {
            debug!("{}: final chunk of {n} bytes", path.display());
            let Some(digest) = sha512_partial(&mut state, &buf[..n], Some(total))? else {
                bail!("hash of {} was not finalized", path.display());
            };
            return Ok(digest);
        }

        sha512_partial(&mut state, &buf, None)?;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    for path in &args.files {
        let start = Instant::now();
        let digest = hash_file(path)?;

        println!(
            "{} - {} ({:.3}s)",
            format_digest(&digest),
            path.display(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

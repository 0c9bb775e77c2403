use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use memmap2::Mmap;

use topfreq::keygen::{IpGenerator, KeySource};
use topfreq::{TopFreq, TopFreqError};

/// Synthetic request driver for the frequency cache.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of synthetic requests to run
    #[arg(short = 'n', long, default_value_t = 100_000_000)]
    requests: u64,

    /// Capacity of the ranked view
    #[arg(short = 'k', long, default_value_t = 100)]
    top: usize,

    /// Report progress, and time one observe call, every this many requests
    #[arg(long, default_value_t = 1_000_000)]
    progress: u64,

    /// Seed for the address generator; random if not given
    #[arg(long)]
    seed: Option<u64>,

    /// Replay newline-delimited keys from this file instead of generating
    #[arg(long)]
    input: Option<PathBuf>,
}

fn drive<S: KeySource>(
    cache: &mut TopFreq<String>,
    source: &mut S,
    requests: u64,
    progress: u64,
) -> Result<(), TopFreqError> {
    for idx in 0..requests {
        let key = source.next_key();
        if progress != 0 && idx % progress == 0 {
            println!("progress: {}", idx);
            let start = Instant::now();
            cache.observe(key)?;
            println!("observe: {:?}", start.elapsed());
        } else {
            cache.observe(key)?;
        }
    }
    Ok(())
}

fn replay(cache: &mut TopFreq<String>, path: &Path) -> Result<u64, Box<dyn Error>> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };

    let mut handled = 0u64;
    for line in mmap.split(|&b| b == b'\n') {
        if line.is_empty() {
            continue;
        }
        cache.observe(String::from_utf8_lossy(line).into_owned())?;
        handled += 1;
    }
    Ok(handled)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let mut cache = TopFreq::with_capacity(args.top);

    let handled = if let Some(path) = &args.input {
        replay(&mut cache, path)?
    } else {
        let mut source = match args.seed {
            Some(seed) => IpGenerator::with_seed(seed),
            None => IpGenerator::new(),
        };
        drive(&mut cache, &mut source, args.requests, args.progress)?;
        args.requests
    };

    let start = Instant::now();
    let top = cache.top();
    println!("top: {:?}", start.elapsed());

    println!("requests handled: {}", handled);
    println!("distinct keys: {}", cache.distinct_keys());
    if let Some(hottest) = top.first() {
        println!(
            "most frequent key: {}, frequency: {}",
            hottest,
            cache.frequency(hottest.as_str())
        );
    }

    Ok(())
}

//! Synthetic key sources for driving the cache.

use std::net::Ipv4Addr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Hands out one key per request.
pub trait KeySource {
    fn next_key(&mut self) -> String;
}

/// Generates a uniformly random IPv4 address per call.
pub struct IpGenerator {
    rng: SmallRng,
}

impl IpGenerator {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic generator for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for IpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for IpGenerator {
    fn next_key(&mut self) -> String {
        Ipv4Addr::from(self.rng.random::<u32>()).to_string()
    }
}

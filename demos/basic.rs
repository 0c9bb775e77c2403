use topfreq::{TopFreq, TopFreqError};

fn main() -> Result<(), TopFreqError> {
    // Track the top 3 keys; counts themselves are kept for every key seen.
    let mut cache = TopFreq::with_capacity(3);

    for _ in 0..3 {
        cache.observe("203.0.113.7")?;
    }
    for _ in 0..2 {
        cache.observe("198.51.100.4")?;
    }
    cache.observe("192.0.2.1")?;

    println!("Hottest keys:");
    for key in cache.top() {
        println!("{}: {}", key, cache.frequency(key));
    }

    // An unseen key simply reports zero.
    println!("\nFrequency of 203.0.113.99: {}", cache.frequency("203.0.113.99"));

    Ok(())
}

//! Exact per-key frequency counting with a bounded, rank-ordered view of the
//! hottest keys.
//!
//! Every distinct key ever observed keeps an exact count; only the ranked
//! view is bounded. The ranked view is maintained incrementally on each
//! observation instead of being recomputed from the full key population,
//! so "which keys are hottest right now" stays cheap to answer even when
//! millions of distinct keys have been counted.

mod error;
mod rank;
mod store;
mod topfreq;

pub mod keygen;

pub use error::TopFreqError;
pub use topfreq::{TopFreq, DEFAULT_TOP_N};

use thiserror::Error;

/// Internal-consistency failures surfaced by `TopFreq::observe`.
///
/// Either variant means the ranked list and the frequency store no longer
/// agree about which keys are tracked. That relationship cannot be
/// repaired from the outside, so neither condition is recoverable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TopFreqError {
    /// The ranked list was empty at a point where a tracked minimum entry
    /// must exist.
    #[error("ranked list is empty where a tracked minimum was expected")]
    RankedListEmpty,

    /// A key held by the ranked list has no entry in the frequency store.
    #[error("key in the ranked list has no frequency store entry")]
    MissingFrequency,
}

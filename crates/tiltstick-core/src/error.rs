use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// The raw quaternion had a zero or non-finite norm and cannot be
    /// normalized. The cycle that produced it emits no axis sample.
    #[error("Degenerate orientation sample (zero or non-finite norm)")]
    DegenerateInput,
    /// The orientation source never delivered enough samples for a
    /// recenter to complete within its attempt budget.
    #[error("Orientation source unavailable during recenter")]
    SensorUnavailable,
}

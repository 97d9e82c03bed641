use thiserror::Error;

/// Errors raised by sampling designs and by the input layers around them.
///
/// Every design validates its parameters before drawing, so an error never
/// comes with a partial sample.
#[derive(Debug, Error)]
pub enum SamplingError {
    /// More units were requested than the frame holds.
    #[error("requested {requested} units but only {available} are available")]
    InvalidSize { requested: usize, available: usize },

    /// A size that must be positive was zero.
    #[error("{0} must be positive")]
    ZeroSize(&'static str),

    /// A fixed systematic start outside `0..interval`.
    #[error("systematic start {start} is outside 0..{interval}")]
    InvalidStart { start: usize, interval: usize },

    /// A stratified allocation does not fit the strata it is applied to.
    #[error("invalid allocation: {0}")]
    InvalidAllocation(String),

    /// An inclusive value range with `low > high`.
    #[error("empty value range [{low}, {high}]")]
    InvalidRange { low: i64, high: i64 },

    /// The population, strata set or cluster set has no units.
    #[error("cannot draw from an empty {0}")]
    EmptyPopulation(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file contains no data records")]
    EmptyFile,

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SamplingError>;

/// Fails with [`SamplingError::InvalidSize`] when `requested > available`.
pub(crate) fn ensure_fits(requested: usize, available: usize) -> Result<()> {
    if requested > available {
        return Err(SamplingError::InvalidSize { requested, available });
    }
    Ok(())
}

/// Sum of `sizes`, or [`SamplingError::InvalidAllocation`] when it overflows `usize`.
pub(crate) fn checked_total(sizes: &[usize]) -> Result<usize> {
    sizes
        .iter()
        .try_fold(0usize, |acc, &size| acc.checked_add(size))
        .ok_or_else(|| SamplingError::InvalidAllocation("sizes add up to more than usize::MAX".to_string()))
}

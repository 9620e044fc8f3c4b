use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A configuration value is out of its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// `step` was called before the filter received a valid break frequency.
    #[error("filter is not initialized")]
    NotInitialized,
    /// The sample passed to `step` is NaN or infinite.
    #[error("sample is not a finite number")]
    NonFiniteSample,
}

pub type Result<T> = core::result::Result<T, Error>;

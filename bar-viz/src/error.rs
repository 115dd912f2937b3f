use core::fmt;

/// The precondition a caller broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The sample buffer length was zero.
    ZeroLength,
    /// The requested number of bars was zero.
    ZeroBarCount,
    /// A reduction range whose start lies after its end.
    InvertedRange { from: usize, to: usize },
    /// A reduction range reaching past the end of the sample buffer.
    RangeOutOfBounds { to: usize, len: usize },
    /// A bar index that has no range in the boundary table.
    BarOutOfBounds { index: usize, bar_count: usize },
    /// An output slice whose length differs from the bar count.
    BarBufferMismatch { expected: usize, actual: usize },
    /// A sample scale that is zero, negative or NaN.
    NonPositiveScale,
}

/// Coarse classification of [`VizError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

/// Top-level error type for bar computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VizError {
    InvalidArgument(InvalidArgument),
}

impl VizError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VizError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidArgument::ZeroLength => write!(f, "sample buffer length must be greater than 0"),
            InvalidArgument::ZeroBarCount => write!(f, "bar count must be greater than 0"),
            InvalidArgument::InvertedRange { from, to } => {
                write!(f, "range start {} is after range end {}", from, to)
            }
            InvalidArgument::RangeOutOfBounds { to, len } => {
                write!(f, "range end {} out of bounds for {} samples", to, len)
            }
            InvalidArgument::BarOutOfBounds { index, bar_count } => {
                write!(f, "bar {} out of bounds for {} bars", index, bar_count)
            }
            InvalidArgument::BarBufferMismatch { expected, actual } => write!(
                f,
                "bar buffer holds {} values, expected {}",
                actual, expected
            ),
            InvalidArgument::NonPositiveScale => write!(f, "sample scale must be greater than 0"),
        }
    }
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::InvalidArgument(e) => write!(f, "invalid argument: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VizError {}

impl From<InvalidArgument> for VizError {
    fn from(e: InvalidArgument) -> Self {
        VizError::InvalidArgument(e)
    }
}

/// Convenience alias so callers can write `Result<T>` instead of `Result<T, VizError>`.
pub type Result<T> = core::result::Result<T, VizError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_kind_and_display() {
        let err: VizError = InvalidArgument::InvertedRange { from: 4, to: 2 }.into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            err.to_string(),
            "invalid argument: range start 4 is after range end 2"
        );
    }
}

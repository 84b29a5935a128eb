use thiserror::Error;

/// Errors reported by the checked constructors of [`Matrix`][crate::Matrix] and
/// [`Vector`][crate::Vector].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The number of supplied elements does not match the number of elements of the target type.
    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Checks that `actual` elements were supplied where `expected` are required.
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, actual })
    }
}

use super::Error;

/// Error when walking a parent or foreign-key chain revisits an id.
///
/// The parent graph is required to be acyclic; a revisited id means the
/// backing records are corrupt. Detection is explicit so that a bad chain is
/// reported instead of recursing unboundedly.
#[derive(Debug)]
pub(super) struct CycleError {
    message: Box<str>,
}

impl std::error::Error for CycleError {}

impl core::fmt::Display for CycleError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cycle detected: {}", self.message)
    }
}

impl Error {
    /// Creates a cycle error.
    pub fn cycle(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Cycle(CycleError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a cycle error.
    pub fn is_cycle(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Cycle(_))
    }
}

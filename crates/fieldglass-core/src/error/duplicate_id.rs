use super::Error;

/// Error when hierarchy-builder input repeats a field id.
///
/// Builder behavior over duplicate ids is undefined, so the input is rejected
/// up front rather than producing an arbitrary tree.
#[derive(Debug)]
pub(super) struct DuplicateIdError {
    id: u64,
}

impl std::error::Error for DuplicateIdError {}

impl core::fmt::Display for DuplicateIdError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "duplicate field id {} in hierarchy input", self.id)
    }
}

impl Error {
    /// Creates a duplicate id error.
    pub fn duplicate_id(id: u64) -> Error {
        Error::from(super::ErrorKind::DuplicateId(DuplicateIdError { id }))
    }

    /// Returns `true` if this error is a duplicate id error.
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateId(_))
    }
}

use super::Error;

/// Error when a referenced table or parent field cannot be fetched.
///
/// Raised by the qualified-name walk when a `table_id` or `parent_id` points
/// at a record the store no longer has. A missing foreign-key *target* is not
/// reported this way; FK integrity belongs to the collaborator and absence is
/// a normal result there.
#[derive(Debug)]
pub(super) struct DanglingReferenceError {
    message: Box<str>,
}

impl std::error::Error for DanglingReferenceError {}

impl core::fmt::Display for DanglingReferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "dangling reference: {}", self.message)
    }
}

impl Error {
    /// Creates a dangling reference error.
    pub fn dangling_reference(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DanglingReference(
            DanglingReferenceError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a dangling reference error.
    pub fn is_dangling_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DanglingReference(_))
    }
}

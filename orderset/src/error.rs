/// The error type returned by the failing operations of [`OrderedSet`][crate::OrderedSet].
///
/// A failed call never changes the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// The key is not present.
    NotFound,
    /// The key is already present.
    AlreadyExists,
}

impl core::fmt::Display for SetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SetError::NotFound => "key not found",
            SetError::AlreadyExists => "key already exists",
        };

        core::fmt::Display::fmt(msg, f)
    }
}

impl std::error::Error for SetError {}

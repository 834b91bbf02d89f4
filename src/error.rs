//! Failures reported by [`List`](crate::List) operations.

/// Errors produced by list operations.
///
/// Every failing operation is checked before anything is written,
/// so the list is left unchanged when one of these is returned.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A positional operation received an index outside its valid range.
    #[error("index {index} is out of bounds for size {size}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of elements in the list at the time of the call.
        size: usize,
    },
    /// The source list of a bulk append is absent.
    #[error("source list is absent")]
    NullReference,
    /// Removal by value found no equal element.
    #[error("no such element found")]
    ElementNotFound,
    /// The requested capacity cannot be allocated.
    #[error("capacity {capacity} exceeds the maximum allocation size")]
    InvalidArgument {
        /// The rejected capacity.
        capacity: usize,
    },
}

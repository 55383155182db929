//! Error types shared by every container in the crate.
//!
//! All failures are local and synchronous: they signal that a caller
//! violated an operation's precondition (asking an empty set for its
//! minimum, reading past the end of a list, ...). Every operation that
//! returns an error leaves the container exactly as it was before the call.

/// Represents a precondition failure reported by a container operation.
///
/// Each variant carries the name of the container type that reported it, so
/// errors stay readable when several containers are used side by side.
///
/// # Examples
///
/// ```rust
/// use corral::ContainerError;
///
/// let error = ContainerError::OutOfRange {
///     container: "Vector",
///     index: 7,
///     size: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Vector: index 7 is out of range for size 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The operation needs at least one element but the container is empty.
    EmptyCollection {
        /// The container type that reported the error.
        container: &'static str,
    },
    /// No element satisfies the requested ordering relation.
    NotFound {
        /// The container type that reported the error.
        container: &'static str,
    },
    /// An index was not smaller than the container size.
    OutOfRange {
        /// The container type that reported the error.
        container: &'static str,
        /// The offending index.
        index: usize,
        /// The container size at the time of the call.
        size: usize,
    },
}

impl ContainerError {
    /// Creates an [`ContainerError::EmptyCollection`] for `container`.
    #[inline]
    #[must_use]
    pub const fn empty(container: &'static str) -> Self {
        Self::EmptyCollection { container }
    }

    /// Creates a [`ContainerError::NotFound`] for `container`.
    #[inline]
    #[must_use]
    pub const fn not_found(container: &'static str) -> Self {
        Self::NotFound { container }
    }

    /// Creates a [`ContainerError::OutOfRange`] for `container`.
    #[inline]
    #[must_use]
    pub const fn out_of_range(container: &'static str, index: usize, size: usize) -> Self {
        Self::OutOfRange {
            container,
            index,
            size,
        }
    }

    /// Returns the name of the container type that reported the error.
    #[must_use]
    pub const fn container(&self) -> &'static str {
        match self {
            Self::EmptyCollection { container }
            | Self::NotFound { container }
            | Self::OutOfRange { container, .. } => container,
        }
    }
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection { container } => {
                write!(formatter, "{container}: the container is empty")
            }
            Self::NotFound { container } => {
                write!(formatter, "{container}: no element satisfies the query")
            }
            Self::OutOfRange {
                container,
                index,
                size,
            } => write!(
                formatter,
                "{container}: index {index} is out of range for size {size}"
            ),
        }
    }
}

impl std::error::Error for ContainerError {}

/// Result type returned by fallible container operations.
pub type Result<T> = std::result::Result<T, ContainerError>;

//! Error types for the rota-rotation crate.

/// Error type for all fallible operations in the rota-rotation crate.
///
/// The engine itself is total over dates; the only failure point is
/// configuration construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RotationError {
    /// Returned when a cycle length of zero days is supplied.
    #[error("invalid cycle length: {cycle_length} (must be positive)")]
    InvalidCycleLength {
        /// The invalid cycle length that was provided.
        cycle_length: u32,
    },
}

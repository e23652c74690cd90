//! Error type for the drive.

use thiserror::Error;

/// Failure modes of [`transduce`](crate::transduce).
///
/// Failures inside user handlers or the source iterator are not caught
/// here; they unwind through the drive untouched, and `complete` is not
/// invoked for an aborted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransduceError {
    /// The reducer chain supplies no seed and the caller provided none.
    ///
    /// Bare step closures carry no seed; drive them through
    /// [`transduce_init`](crate::transduce_init) or use a seeded
    /// [`FnReducer`](crate::FnReducer).
    #[error("no initial value: the reducer supplies no seed and none was given")]
    MissingInit,
}

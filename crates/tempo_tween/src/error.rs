//! Tween error types

use thiserror::Error;

use crate::value::ValueKind;

/// Errors surfaced by tween construction, configuration, and the registry
#[derive(Error, Debug)]
pub enum TweenError {
    /// Tween duration must be strictly positive
    #[error("tween duration must be positive ({0} given)")]
    InvalidDuration(f32),

    /// Loop counts below 2 have no effect
    #[error("loop count {0} is below the minimum of 2")]
    InvalidLoopCount(u32),

    /// A tween with this identifier is already registered
    #[error("a tween with identifier `{0}` is already registered")]
    DuplicateIdentifier(String),

    /// No tween registered under this identifier
    #[error("no tween registered under identifier `{0}`")]
    UnknownIdentifier(String),

    /// Easing name did not resolve to a known curve
    #[error("unknown easing `{0}`")]
    UnsupportedEase(String),

    /// Start and end values are of different kinds
    #[error("cannot interpolate between {start:?} and {end:?} values")]
    UnsupportedInterpolation { start: ValueKind, end: ValueKind },

    /// Appending this tween would close its own chain
    #[error("appending `{0}` would close its own chain")]
    CyclicChain(String),
}

/// Result type for tween operations
pub type Result<T> = std::result::Result<T, TweenError>;

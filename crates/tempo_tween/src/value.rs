//! Tween value kinds and interpolation
//!
//! A tween animates one value of a closed set of kinds. Continuous kinds
//! interpolate linearly and unclamped (overshooting easings like Back and
//! Elastic must carry through); discrete kinds are step functions that hold
//! the start value for the whole pass and switch on the completing tick.

use tempo_core::{Color, Vec2, Vec3};

use crate::error::{Result, TweenError};

/// A value a tween can animate
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenValue {
    Scalar(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Color(Color),
    Bool(bool),
    /// Discrete handle (sprite index, frame id); swapped, never blended.
    Token(u64),
}

/// The kind of a [`TweenValue`], used for pairing checks and error reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Vec2,
    Vec3,
    Color,
    Bool,
    Token,
}

impl TweenValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            TweenValue::Scalar(_) => ValueKind::Scalar,
            TweenValue::Vec2(_) => ValueKind::Vec2,
            TweenValue::Vec3(_) => ValueKind::Vec3,
            TweenValue::Color(_) => ValueKind::Color,
            TweenValue::Bool(_) => ValueKind::Bool,
            TweenValue::Token(_) => ValueKind::Token,
        }
    }

    pub fn same_kind(&self, other: &TweenValue) -> bool {
        self.kind() == other.kind()
    }
}

/// Compute the in-between value for one tick.
///
/// `t` is the eased progress and may leave [0, 1] under overshooting
/// curves. `completed` marks the tick whose pass reached its full duration;
/// the step kinds key off it rather than off `t`, so an easing that rings
/// past 1.0 mid-flight cannot flicker a discrete value.
pub fn interpolate(
    start: TweenValue,
    end: TweenValue,
    t: f32,
    completed: bool,
) -> Result<TweenValue> {
    let value = match (start, end) {
        (TweenValue::Scalar(a), TweenValue::Scalar(b)) => TweenValue::Scalar(a + (b - a) * t),
        (TweenValue::Vec2(a), TweenValue::Vec2(b)) => TweenValue::Vec2(a.lerp_unclamped(b, t)),
        (TweenValue::Vec3(a), TweenValue::Vec3(b)) => TweenValue::Vec3(a.lerp_unclamped(b, t)),
        (TweenValue::Color(a), TweenValue::Color(b)) => TweenValue::Color(a.lerp_unclamped(b, t)),
        (TweenValue::Bool(a), TweenValue::Bool(b)) => TweenValue::Bool(if completed { b } else { a }),
        (TweenValue::Token(a), TweenValue::Token(b)) => {
            TweenValue::Token(if completed { b } else { a })
        }
        (start, end) => {
            return Err(TweenError::UnsupportedInterpolation {
                start: start.kind(),
                end: end.kind(),
            })
        }
    };
    Ok(value)
}

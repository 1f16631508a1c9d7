//! Ready-made tween constructors
//!
//! Thin wrappers over [`Tween::new`] for the common cases: timers, scalar
//! properties, positions, colors, and discrete swaps. Each returns the
//! configured tween for further builder calls (`with_ease`, `with_loops`,
//! `append`, ...).

use tempo_core::{Color, Vec3};

use crate::error::Result;
use crate::tween::{TargetId, Tween};
use crate::value::TweenValue;

/// A timer: completes after `seconds`, producing no values worth reading.
///
/// Useful as a delay link inside a chain, or as a second watch when one
/// progress threshold per tween is not enough.
pub fn wait(identifier: impl Into<String>, seconds: f32) -> Result<Tween> {
    Tween::new(
        TargetId::default(),
        identifier,
        TweenValue::Bool(false),
        TweenValue::Bool(true),
        seconds,
        |_| {},
    )
}

/// Drive an `f32` property from `start` to `end` over `seconds`.
pub fn scalar(
    target: TargetId,
    identifier: impl Into<String>,
    start: f32,
    end: f32,
    seconds: f32,
    mut sink: impl FnMut(f32) + 'static,
) -> Result<Tween> {
    Tween::new(
        target,
        identifier,
        TweenValue::Scalar(start),
        TweenValue::Scalar(end),
        seconds,
        move |value| {
            if let TweenValue::Scalar(v) = value {
                sink(v);
            }
        },
    )
}

/// Drive a position-like [`Vec3`] property from `start` to `end`.
pub fn vec3(
    target: TargetId,
    identifier: impl Into<String>,
    start: Vec3,
    end: Vec3,
    seconds: f32,
    mut sink: impl FnMut(Vec3) + 'static,
) -> Result<Tween> {
    Tween::new(
        target,
        identifier,
        TweenValue::Vec3(start),
        TweenValue::Vec3(end),
        seconds,
        move |value| {
            if let TweenValue::Vec3(v) = value {
                sink(v);
            }
        },
    )
}

/// Drive a [`Color`] property from `start` to `end`.
pub fn color(
    target: TargetId,
    identifier: impl Into<String>,
    start: Color,
    end: Color,
    seconds: f32,
    mut sink: impl FnMut(Color) + 'static,
) -> Result<Tween> {
    Tween::new(
        target,
        identifier,
        TweenValue::Color(start),
        TweenValue::Color(end),
        seconds,
        move |value| {
            if let TweenValue::Color(v) = value {
                sink(v);
            }
        },
    )
}

/// Hold the `from` token for `seconds`, then deliver `to` once — a delayed
/// sprite/frame swap.
pub fn token_swap(
    target: TargetId,
    identifier: impl Into<String>,
    from: u64,
    to: u64,
    seconds: f32,
    mut sink: impl FnMut(u64) + 'static,
) -> Result<Tween> {
    Tween::new(
        target,
        identifier,
        TweenValue::Token(from),
        TweenValue::Token(to),
        seconds,
        move |value| {
            if let TweenValue::Token(v) = value {
                sink(v);
            }
        },
    )
}

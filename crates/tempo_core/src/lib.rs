//! Tempo Core Primitives
//!
//! Foundational types shared across the Tempo crates:
//!
//! - **Value types**: [`Vec2`], [`Vec3`], and linear-space [`Color`], with
//!   the unclamped lerp operations the tween engine interpolates through
//! - **Frame timing**: [`FrameDelta`], the per-frame clock feed carrying
//!   both the scaled and the unscaled delta

pub mod color;
pub mod time;
pub mod vec;

pub use color::Color;
pub use time::FrameDelta;
pub use vec::{Vec2, Vec3};

//! Tempo Tween Engine
//!
//! Time-driven per-value interpolation. One [`Tween`] animates one value
//! from a start to an end over a duration; a [`TweenScheduler`] owned by the
//! host drives every live tween once per frame.
//!
//! # Features
//!
//! - **Easing**: 37 curves across the standard families, all anchored at
//!   the endpoints
//! - **Looping**: fixed pass counts, with optional ping-pong direction
//!   reversal on every wrap
//! - **Delays & thresholds**: delayed starts and a per-pass progress watch
//!   with a one-shot callback
//! - **Chaining**: `append` runs tweens back to back, handed over by the
//!   scheduler on completion
//! - **Two clocks**: each tween binds to the scaled or the unscaled clock
//!   feed at construction
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use tempo_core::FrameDelta;
//! use tempo_tween::{EaseKind, TargetId, Tween, TweenScheduler, TweenValue};
//!
//! # fn main() -> tempo_tween::Result<()> {
//! let alpha = Rc::new(Cell::new(0.0f32));
//! let sink = alpha.clone();
//!
//! let fade = Tween::new(
//!     TargetId(1),
//!     "fade_in",
//!     TweenValue::Scalar(0.0),
//!     TweenValue::Scalar(1.0),
//!     0.5,
//!     move |value| {
//!         if let TweenValue::Scalar(v) = value {
//!             sink.set(v);
//!         }
//!     },
//! )?
//! .with_ease(EaseKind::OutCubic);
//!
//! let mut scheduler = TweenScheduler::new();
//! scheduler.add(fade)?;
//!
//! scheduler.tick(FrameDelta::uniform(0.25));
//! assert!(alpha.get() > 0.0);
//! scheduler.tick(FrameDelta::uniform(0.25));
//! assert_eq!(alpha.get(), 1.0);
//! assert!(scheduler.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod easing;
pub mod error;
pub mod presets;
pub mod scheduler;
pub mod tween;
pub mod value;

pub use easing::EaseKind;
pub use error::{Result, TweenError};
pub use scheduler::TweenScheduler;
pub use tween::{TargetId, Tween, TweenState};
pub use value::{interpolate, TweenValue, ValueKind};

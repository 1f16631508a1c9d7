//! The tween state machine
//!
//! One [`Tween`] instance per running animation. It owns the timing state
//! (elapsed clock, start delay, loop counter, direction flag, watched
//! progress threshold), drives the easing and interpolation each tick, and
//! reports its lifecycle state back to the scheduler that ticks it.

use smallvec::SmallVec;
use tempo_core::FrameDelta;

use crate::easing::EaseKind;
use crate::error::{Result, TweenError};
use crate::value::{interpolate, TweenValue};

/// Opaque handle to the host object a tween animates.
///
/// The engine never looks inside it; liveness is answered by the predicate
/// installed with [`Tween::with_liveness`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// Argument-free callback hook (tick, threshold, completion).
pub type Hook = Box<dyn FnMut()>;

/// Sink receiving the interpolated value each tick.
pub type ValueSink = Box<dyn FnMut(TweenValue)>;

/// Predicate asked whether the target still exists.
pub type LivenessProbe = Box<dyn Fn(TargetId) -> bool>;

/// Lifecycle state of a tween
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenState {
    Running,
    Paused,
    /// Ran to its natural end (or was force-finished); eligible for the
    /// registry's completion callback delivery.
    Completed,
    /// Cancelled; completion callbacks never fire.
    Killed,
}

impl TweenState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TweenState::Completed | TweenState::Killed)
    }
}

/// A single time-driven value animation
pub struct Tween {
    identifier: String,
    target: TargetId,
    start_value: TweenValue,
    end_value: TweenValue,
    duration: f32,
    elapsed: f32,
    delay: f32,
    delay_elapsed: f32,
    ease: EaseKind,
    reverse: bool,
    ping_pong: bool,
    loops: u32,
    loops_done: u32,
    threshold: Option<f32>,
    threshold_origin: Option<f32>,
    ignore_time_scale: bool,
    state: TweenState,
    value_sink: Option<ValueSink>,
    on_update: SmallVec<[Hook; 2]>,
    on_complete: SmallVec<[Hook; 2]>,
    on_threshold: Option<Hook>,
    liveness: Option<LivenessProbe>,
    next: Option<Box<Tween>>,
}

impl Tween {
    /// Create a tween from `start` to `end` over `duration` seconds.
    ///
    /// Fails with [`TweenError::InvalidDuration`] for non-positive durations
    /// and [`TweenError::UnsupportedInterpolation`] when `start` and `end`
    /// are of different value kinds, so the per-tick path never has to deal
    /// with either.
    pub fn new(
        target: TargetId,
        identifier: impl Into<String>,
        start: TweenValue,
        end: TweenValue,
        duration: f32,
        value_sink: impl FnMut(TweenValue) + 'static,
    ) -> Result<Self> {
        if duration <= 0.0 {
            return Err(TweenError::InvalidDuration(duration));
        }
        if !start.same_kind(&end) {
            return Err(TweenError::UnsupportedInterpolation {
                start: start.kind(),
                end: end.kind(),
            });
        }

        Ok(Self {
            identifier: identifier.into(),
            target,
            start_value: start,
            end_value: end,
            duration,
            elapsed: 0.0,
            delay: 0.0,
            delay_elapsed: 0.0,
            ease: EaseKind::Linear,
            reverse: false,
            ping_pong: false,
            loops: 0,
            loops_done: 0,
            threshold: None,
            threshold_origin: None,
            ignore_time_scale: false,
            state: TweenState::Running,
            value_sink: Some(Box::new(value_sink)),
            on_update: SmallVec::new(),
            on_complete: SmallVec::new(),
            on_threshold: None,
            liveness: None,
            next: None,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TweenState::Completed
    }

    pub fn was_killed(&self) -> bool {
        self.state == TweenState::Killed
    }

    pub fn is_paused(&self) -> bool {
        self.state == TweenState::Paused
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn loops_done(&self) -> u32 {
        self.loops_done
    }

    pub fn ignores_time_scale(&self) -> bool {
        self.ignore_time_scale
    }

    /// Identifier of the directly chained tween, if any.
    pub fn chained_identifier(&self) -> Option<&str> {
        self.next.as_deref().map(|tween| tween.identifier.as_str())
    }

    // =========================================================================
    // Builder configuration
    // =========================================================================

    /// Select the easing curve (default linear).
    pub fn with_ease(mut self, ease: EaseKind) -> Self {
        self.ease = ease;
        self
    }

    /// Run `loops` total passes. With `ping_pong`, every wrap reverses
    /// direction instead of restarting forward.
    ///
    /// Counts below 2 would have no effect and fail with
    /// [`TweenError::InvalidLoopCount`]; an unconfigured tween runs once.
    pub fn with_loops(mut self, ping_pong: bool, loops: u32) -> Result<Self> {
        if loops < 2 {
            return Err(TweenError::InvalidLoopCount(loops));
        }
        self.loops = loops;
        self.ping_pong = ping_pong;
        Ok(self)
    }

    /// Bind this tween to the unscaled wall clock instead of the scaled one.
    pub fn with_ignore_time_scale(mut self, ignore: bool) -> Self {
        self.ignore_time_scale = ignore;
        self
    }

    /// Wait `delay` seconds of the bound clock before progress accumulates.
    pub fn with_start_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Install the target liveness predicate. A target reported dead kills
    /// the tween on its next tick; without a predicate the target is
    /// considered alive forever.
    pub fn with_liveness(mut self, probe: impl Fn(TargetId) -> bool + 'static) -> Self {
        self.liveness = Some(Box::new(probe));
        self
    }

    /// Run `hook` when the tween completes. Hooks accumulate and fire in
    /// registration order.
    pub fn on_complete(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_complete.push(Box::new(hook));
        self
    }

    /// Run `hook` on every active tick, before the value sink. Hooks
    /// accumulate and fire in registration order.
    pub fn on_update(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_update.push(Box::new(hook));
        self
    }

    /// Run `hook` once per pass when progress reaches `fraction` (clamped to
    /// [0, 1]). The watch re-arms on every wrap. A later call replaces any
    /// earlier watch; only one fraction is observed at a time.
    pub fn on_reach_percentage(mut self, fraction: f32, hook: impl FnMut() + 'static) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        self.threshold = Some(fraction);
        self.threshold_origin = Some(fraction);
        self.on_threshold = Some(Box::new(hook));
        self
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Run `next` after this tween's chain finishes (builder form).
    pub fn append(mut self, next: Tween) -> Result<Self> {
        self.append_link(next)?;
        Ok(self)
    }

    /// Run `next` after this tween's chain finishes.
    ///
    /// `next` is paused immediately and attached at the tail of the existing
    /// chain, so repeated appends run in call order. The scheduler resumes
    /// it when the link ahead of it completes, then detaches the link so a
    /// finished chain cannot fire twice. Appending an identifier already
    /// present in the chain fails with [`TweenError::CyclicChain`];
    /// appending to an already completed tween leaves `next` running so that
    /// registering it starts it on the next tick.
    pub fn append_link(&mut self, mut next: Tween) -> Result<()> {
        let cyclic = {
            let own = self.chain_identifiers();
            let theirs = next.chain_identifiers();
            own.iter().any(|id| theirs.contains(id))
        };
        if cyclic {
            return Err(TweenError::CyclicChain(next.identifier));
        }

        if self.state == TweenState::Completed {
            next.state = TweenState::Running;
        } else {
            next.pause();
        }

        tracing::debug!(
            head = %self.identifier,
            appended = %next.identifier,
            "chained tween"
        );
        self.attach_tail(Box::new(next));
        Ok(())
    }

    fn attach_tail(&mut self, next: Box<Tween>) {
        match self.next {
            Some(ref mut link) => link.attach_tail(next),
            None => self.next = Some(next),
        }
    }

    fn chain_identifiers(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        let mut cursor = Some(self);
        while let Some(tween) = cursor {
            ids.push(tween.identifier.as_str());
            cursor = tween.next.as_deref();
        }
        ids
    }

    /// Detach and return the chained tween, if any.
    pub(crate) fn take_next(&mut self) -> Option<Tween> {
        self.next.take().map(|boxed| *boxed)
    }

    /// Drain the completion hooks for delivery.
    pub(crate) fn take_on_complete(&mut self) -> SmallVec<[Hook; 2]> {
        std::mem::take(&mut self.on_complete)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn pause(&mut self) {
        if self.state == TweenState::Running {
            self.state = TweenState::Paused;
        }
    }

    /// Resume a paused tween. Resuming a tween that is not paused is a soft
    /// warning condition: the call is logically idempotent and changes
    /// nothing.
    pub fn resume(&mut self) {
        if self.state != TweenState::Paused {
            tracing::warn!(identifier = %self.identifier, "resumed a tween that was not paused");
            return;
        }
        self.state = TweenState::Running;
    }

    /// Unconditional terminal kill. Clears every callback, including the
    /// completion hooks, so nothing fires after this call. Idempotent, and
    /// wins over a completion observed in the same frame.
    pub fn kill(&mut self) {
        self.state = TweenState::Killed;
        self.on_complete.clear();
        self.clear_tick_hooks();
    }

    /// Force-finish: mark the tween completed and drop its per-tick hooks,
    /// keeping the completion hooks for the registry to deliver. Also the
    /// internal path taken when a tween reaches its natural end.
    pub fn kill_on_complete(&mut self) {
        if self.state == TweenState::Killed {
            return;
        }
        tracing::debug!(identifier = %self.identifier, "tween finished");
        self.state = TweenState::Completed;
        self.clear_tick_hooks();
    }

    fn clear_tick_hooks(&mut self) {
        self.on_update.clear();
        self.on_threshold = None;
        self.value_sink = None;
    }

    /// Ask the installed predicate whether the target is gone.
    pub fn is_target_destroyed(&self) -> bool {
        match self.liveness {
            Some(ref probe) => !probe(self.target),
            None => false,
        }
    }

    // =========================================================================
    // Per-tick drive
    // =========================================================================

    /// Advance the tween by one frame.
    ///
    /// Consumes the clock this tween is bound to, runs the delay gate,
    /// computes the eased in-between value, feeds the hooks and the value
    /// sink, fires the armed threshold, and handles wrap bookkeeping
    /// (loop counting, ping-pong reversal, threshold re-arm, completion).
    pub fn update(&mut self, delta: FrameDelta) {
        if self.state.is_terminal() {
            return;
        }
        if self.is_target_destroyed() {
            tracing::debug!(identifier = %self.identifier, "target destroyed, killing tween");
            self.kill();
            return;
        }
        if self.state == TweenState::Paused {
            return;
        }

        let dt = if self.ignore_time_scale {
            delta.unscaled
        } else {
            delta.scaled
        };

        // Delay gate: a tick ending at or before the boundary is swallowed
        // whole; the first tick strictly past it falls through with its full
        // dt credited to progress.
        if self.delay > 0.0 && self.delay_elapsed <= self.delay {
            self.delay_elapsed += dt;
            if self.delay_elapsed <= self.delay {
                return;
            }
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
        }

        let t = self.elapsed / self.duration;
        let eased = self.ease.apply(t);
        let pass_done = self.elapsed >= self.duration;

        let (from, to) = if self.reverse {
            (self.end_value, self.start_value)
        } else {
            (self.start_value, self.end_value)
        };

        let value = match interpolate(from, to, eased, pass_done) {
            Ok(value) => value,
            // start/end kinds are validated at construction
            Err(_) => return,
        };

        for hook in &mut self.on_update {
            hook();
        }
        if let Some(sink) = self.value_sink.as_mut() {
            sink(value);
        }

        if let Some(threshold) = self.threshold {
            if t >= threshold {
                if let Some(hook) = self.on_threshold.as_mut() {
                    hook();
                }
                self.threshold = None;
            }
        }

        if pass_done {
            self.loops_done += 1;
            self.elapsed = 0.0;
            if self.ping_pong {
                self.reverse = !self.reverse;
            }
            self.threshold = self.threshold_origin;

            // loops == 0 runs exactly one pass; otherwise loops is the total
            // number of passes.
            if self.loops == 0 || self.loops_done >= self.loops {
                if self.next.is_none() {
                    self.kill_on_complete();
                } else {
                    self.state = TweenState::Completed;
                }
            }
        }
    }
}

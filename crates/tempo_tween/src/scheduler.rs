//! Tween scheduler
//!
//! Identifier-keyed registry of live tweens plus the frame drive. The host
//! owns the scheduler explicitly (no global instance) and calls
//! [`TweenScheduler::tick`] once per frame; the scheduler delivers each
//! completed tween's completion hooks exactly once, hands chained tweens
//! over, and drops finished and killed instances from the active set.

use rustc_hash::FxHashMap;
use tempo_core::FrameDelta;

use crate::error::{Result, TweenError};
use crate::tween::{Tween, TweenState};

/// Registry and frame driver for live tweens
pub struct TweenScheduler {
    active: FxHashMap<String, Tween>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self {
            active: FxHashMap::default(),
        }
    }

    /// Register a tween under its identifier.
    ///
    /// Fails with [`TweenError::DuplicateIdentifier`] when the identifier
    /// already denotes a live instance; the existing instance is untouched.
    pub fn add(&mut self, tween: Tween) -> Result<()> {
        if self.active.contains_key(tween.identifier()) {
            return Err(TweenError::DuplicateIdentifier(
                tween.identifier().to_owned(),
            ));
        }
        tracing::debug!(identifier = %tween.identifier(), "registered tween");
        self.active.insert(tween.identifier().to_owned(), tween);
        Ok(())
    }

    /// Chain `next` onto the registered tween `id`.
    pub fn append(&mut self, id: &str, next: Tween) -> Result<()> {
        let head = self
            .active
            .get_mut(id)
            .ok_or_else(|| TweenError::UnknownIdentifier(id.to_owned()))?;
        head.append_link(next)
    }

    /// Remove a tween from the active set without running its callbacks.
    pub fn remove(&mut self, id: &str) -> Option<Tween> {
        let removed = self.active.remove(id);
        if removed.is_some() {
            tracing::debug!(identifier = %id, "removed tween");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&Tween> {
        self.active.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Tween> {
        self.active.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tween> {
        self.active.values()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Drive every live tween by one frame.
    ///
    /// The identifier set is snapshotted first so completions and chain
    /// hand-offs never mutate the collection being iterated. There is no
    /// ordering guarantee between independent tweens; the callbacks of one
    /// tween run synchronously within its own update.
    pub fn tick(&mut self, delta: FrameDelta) {
        let ids: Vec<String> = self.active.keys().cloned().collect();

        for id in ids {
            let Some(tween) = self.active.get_mut(&id) else {
                continue;
            };
            tween.update(delta);

            match tween.state() {
                TweenState::Completed => {
                    let Some(mut done) = self.active.remove(&id) else {
                        continue;
                    };
                    for mut hook in done.take_on_complete() {
                        hook();
                    }
                    if let Some(mut chained) = done.take_next() {
                        if chained.is_paused() {
                            chained.resume();
                        }
                        self.hand_off(chained);
                    }
                    tracing::debug!(identifier = %id, "tween completed");
                }
                TweenState::Killed => {
                    self.active.remove(&id);
                    tracing::debug!(identifier = %id, "dropped killed tween");
                }
                TweenState::Running | TweenState::Paused => {}
            }
        }
    }

    /// Register a chained tween after its predecessor completed. The
    /// no-silent-overwrite rule holds here too; a collision drops the
    /// chained tween rather than the live one.
    fn hand_off(&mut self, chained: Tween) {
        let id = chained.identifier().to_owned();
        if self.active.contains_key(&id) {
            tracing::warn!(
                identifier = %id,
                "chained tween identifier already registered, dropping it"
            );
            return;
        }
        self.active.insert(id, chained);
    }
}

impl Default for TweenScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::tween::TargetId;
    use crate::value::TweenValue;

    fn scalar_tween(id: &str, duration: f32) -> Tween {
        Tween::new(
            TargetId(1),
            id,
            TweenValue::Scalar(0.0),
            TweenValue::Scalar(1.0),
            duration,
            |_| {},
        )
        .expect("valid tween")
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let mut scheduler = TweenScheduler::new();
        scheduler.add(scalar_tween("fade", 1.0)).expect("first add");

        let err = scheduler
            .add(scalar_tween("fade", 9.0))
            .expect_err("duplicate");
        assert!(matches!(err, TweenError::DuplicateIdentifier(id) if id == "fade"));

        // The original registration is untouched.
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.get("fade").map(Tween::duration), Some(1.0));
    }

    #[test]
    fn test_completion_fires_once_and_removes() {
        let completions = Rc::new(Cell::new(0));
        let counter = completions.clone();
        let tween = scalar_tween("once", 1.0).on_complete(move || counter.set(counter.get() + 1));

        let mut scheduler = TweenScheduler::new();
        scheduler.add(tween).expect("add");

        scheduler.tick(FrameDelta::uniform(1.0));
        assert_eq!(completions.get(), 1);
        assert!(scheduler.is_empty());

        scheduler.tick(FrameDelta::uniform(1.0));
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_all_completion_hooks_fire_together() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = order.clone();
        let second = order.clone();
        let tween = scalar_tween("multi", 1.0)
            .on_complete(move || first.borrow_mut().push("first"))
            .on_complete(move || second.borrow_mut().push("second"));

        let mut scheduler = TweenScheduler::new();
        scheduler.add(tween).expect("add");
        scheduler.tick(FrameDelta::uniform(1.0));

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_killed_tween_is_dropped_without_completion() {
        let completions = Rc::new(Cell::new(0));
        let counter = completions.clone();
        let tween = scalar_tween("doomed", 1.0).on_complete(move || counter.set(counter.get() + 1));

        let mut scheduler = TweenScheduler::new();
        scheduler.add(tween).expect("add");
        scheduler
            .get_mut("doomed")
            .expect("registered")
            .kill();

        scheduler.tick(FrameDelta::uniform(1.0));
        assert!(scheduler.is_empty());
        assert_eq!(completions.get(), 0);
    }

    #[test]
    fn test_dead_target_is_reaped_without_completion() {
        let completions = Rc::new(Cell::new(0));
        let counter = completions.clone();
        let tween = scalar_tween("orphan", 1.0)
            .with_liveness(|_| false)
            .on_complete(move || counter.set(counter.get() + 1));

        let mut scheduler = TweenScheduler::new();
        scheduler.add(tween).expect("add");
        scheduler.tick(FrameDelta::uniform(0.5));

        assert!(scheduler.is_empty());
        assert_eq!(completions.get(), 0);
    }

    #[test]
    fn test_chain_hand_off() {
        let b_values = Rc::new(RefCell::new(Vec::new()));
        let sink = b_values.clone();
        let b_completions = Rc::new(Cell::new(0));
        let b_counter = b_completions.clone();

        let b = Tween::new(
            TargetId(2),
            "b",
            TweenValue::Scalar(0.0),
            TweenValue::Scalar(1.0),
            1.0,
            move |value| {
                if let TweenValue::Scalar(v) = value {
                    sink.borrow_mut().push(v);
                }
            },
        )
        .expect("valid tween")
        .on_complete(move || b_counter.set(b_counter.get() + 1));

        let a = scalar_tween("a", 1.0).append(b).expect("append");

        let mut scheduler = TweenScheduler::new();
        scheduler.add(a).expect("add");
        assert_eq!(scheduler.len(), 1);

        // First frame finishes `a` and hands `b` over, resumed.
        scheduler.tick(FrameDelta::uniform(1.0));
        assert!(!scheduler.contains("a"));
        assert!(scheduler.contains("b"));
        assert!(b_values.borrow().is_empty());

        // Second frame runs `b` to its own completion.
        scheduler.tick(FrameDelta::uniform(1.0));
        assert!(scheduler.is_empty());
        assert_eq!(*b_values.borrow(), vec![1.0]);
        assert_eq!(b_completions.get(), 1);
    }

    #[test]
    fn test_chain_runs_in_append_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut scheduler = TweenScheduler::new();
        let mut head = scalar_tween("a", 1.0);
        for id in ["b", "c"] {
            let log = order.clone();
            let link = scalar_tween(id, 1.0).on_complete(move || log.borrow_mut().push(id));
            head.append_link(link).expect("append");
        }
        let log = order.clone();
        let head = head.on_complete(move || log.borrow_mut().push("a"));
        scheduler.add(head).expect("add");

        for _ in 0..3 {
            scheduler.tick(FrameDelta::uniform(1.0));
        }
        assert!(scheduler.is_empty());
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scheduler_append_targets_registered_tween() {
        let mut scheduler = TweenScheduler::new();
        scheduler.add(scalar_tween("a", 1.0)).expect("add");
        scheduler
            .append("a", scalar_tween("b", 1.0))
            .expect("append");

        scheduler.tick(FrameDelta::uniform(1.0));
        assert!(scheduler.contains("b"));
    }

    #[test]
    fn test_scheduler_append_unknown_identifier() {
        let mut scheduler = TweenScheduler::new();
        let err = scheduler
            .append("ghost", scalar_tween("b", 1.0))
            .expect_err("unknown");
        assert!(matches!(err, TweenError::UnknownIdentifier(id) if id == "ghost"));
    }

    #[test]
    fn test_hand_off_collision_keeps_live_tween() {
        let chained_values = Rc::new(RefCell::new(Vec::new()));
        let sink = chained_values.clone();
        let chained = Tween::new(
            TargetId(2),
            "busy",
            TweenValue::Scalar(0.0),
            TweenValue::Scalar(1.0),
            1.0,
            move |value| {
                if let TweenValue::Scalar(v) = value {
                    sink.borrow_mut().push(v);
                }
            },
        )
        .expect("valid tween");

        let a = scalar_tween("a", 1.0).append(chained).expect("append");

        let mut scheduler = TweenScheduler::new();
        scheduler.add(a).expect("add");
        // Another live tween already owns the chained identifier.
        scheduler.add(scalar_tween("busy", 30.0)).expect("add");

        scheduler.tick(FrameDelta::uniform(1.0));
        assert_eq!(scheduler.get("busy").map(Tween::duration), Some(30.0));

        scheduler.tick(FrameDelta::uniform(1.0));
        assert!(chained_values.borrow().is_empty());
    }
}

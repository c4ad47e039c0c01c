//=========================================================================
// Tween System
//
// Timed interpolation between value states, advanced once per frame.
//
// Architecture:
//   Tween (builder: to / easing / on_start / on_update / on_complete / chain)
//     └─ owned by TweenGroup (per-scene active set)
//
// Flow:
//   Scene::update(delta) → TweenGroup::advance(delta) → Tween::advance
//
// A tween interpolates a fixed set of f32 channels from its start values
// to its target values over a duration in seconds. On natural completion
// it is removed from the active set; a chained follow-up, if any, is
// promoted into the active set and starts on the next advance.
//
//=========================================================================

//=== Module Declarations =================================================

mod easing;

//=== Public API ==========================================================

pub use easing::Easing;

//=== External Dependencies ===============================================

use log::warn;

//=== Callback Types ======================================================

/// Fired once, the first time the tween advances.
pub type StartFn = Box<dyn FnOnce()>;

/// Fired on every advance with the current channel values.
pub type UpdateFn = Box<dyn FnMut(&[f32])>;

/// Fired once when the tween reaches its target.
pub type CompleteFn = Box<dyn FnOnce()>;

//=== TweenStep ===========================================================

/// Result of advancing a tween by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TweenStep {
    /// Still interpolating (or paused).
    Active,

    /// Reached the target this frame.
    Finished,
}

//=== Tween ===============================================================

/// A single value-interpolation task.
///
/// Built fluently and handed to a [`TweenGroup`]:
///
/// ```
/// use cardstage::core::tween::{Easing, Tween, TweenGroup};
///
/// let mut group = TweenGroup::new();
/// group.start(
///     Tween::new([1.0])
///         .to([0.0], 0.1)
///         .easing(Easing::QuadraticOut)
///         .on_update(|values| { let _scale = values[0]; }),
/// );
/// group.advance(0.05);
/// ```
pub struct Tween {
    from: Vec<f32>,
    to: Vec<f32>,
    current: Vec<f32>,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    started: bool,
    paused: bool,
    on_start: Option<StartFn>,
    on_update: Option<UpdateFn>,
    on_complete: Option<CompleteFn>,
    chain: Option<Box<Tween>>,
}

impl Tween {
    //--- Construction -----------------------------------------------------

    /// Creates a tween at the given start state.
    ///
    /// Without a subsequent [`to`](Self::to) call the tween has zero
    /// duration and completes on its first advance.
    pub fn new(from: impl Into<Vec<f32>>) -> Self {
        let from = from.into();
        let current = from.clone();
        Self {
            to: from.clone(),
            from,
            current,
            duration: 0.0,
            elapsed: 0.0,
            easing: Easing::Linear,
            started: false,
            paused: false,
            on_start: None,
            on_update: None,
            on_complete: None,
            chain: None,
        }
    }

    /// Sets the target state and duration (seconds).
    ///
    /// A target with a different channel count than the start state is a
    /// caller error; the common prefix is interpolated and the rest of
    /// the start state is carried through unchanged.
    pub fn to(mut self, target: impl Into<Vec<f32>>, duration: f32) -> Self {
        let target = target.into();
        if target.len() != self.from.len() {
            warn!(
                "tween target has {} channels, start state has {}; interpolating the common prefix",
                target.len(),
                self.from.len()
            );
        }

        self.to = self.from.clone();
        for (slot, value) in self.to.iter_mut().zip(target) {
            *slot = value;
        }
        self.duration = duration.max(0.0);
        self
    }

    /// Sets the easing curve (default: linear).
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Registers a callback fired on the tween's first advance.
    pub fn on_start(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Registers a callback fired on every advance with current values.
    pub fn on_update(mut self, f: impl FnMut(&[f32]) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Registers a callback fired once on completion.
    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Chains a follow-up tween started when this one completes.
    pub fn chain(mut self, next: Tween) -> Self {
        self.chain = Some(Box::new(next));
        self
    }

    //--- Pause Control ----------------------------------------------------

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    //--- Advancing --------------------------------------------------------

    /// Advances by `delta` seconds, firing callbacks as thresholds pass.
    fn advance(&mut self, delta: f32) -> TweenStep {
        if self.paused {
            return TweenStep::Active;
        }

        if !self.started {
            self.started = true;
            if let Some(f) = self.on_start.take() {
                f();
            }
        }

        self.elapsed += delta;
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        };
        let k = self.easing.sample(t);

        for (i, slot) in self.current.iter_mut().enumerate() {
            *slot = self.from[i] + (self.to[i] - self.from[i]) * k;
        }

        if let Some(f) = &mut self.on_update {
            f(&self.current);
        }

        if t >= 1.0 {
            if let Some(f) = self.on_complete.take() {
                f();
            }
            TweenStep::Finished
        } else {
            TweenStep::Active
        }
    }

    fn take_chain(&mut self) -> Option<Box<Tween>> {
        self.chain.take()
    }
}

//=== TweenGroup ==========================================================

/// The set of in-flight tweens owned by a scene.
///
/// Advanced once per frame while the scene is running; cleared wholesale
/// on scene cleanup. Completed tweens are removed automatically and
/// their chained follow-ups promoted into the active set.
#[derive(Default)]
pub struct TweenGroup {
    active: Vec<Tween>,
}

impl TweenGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Adds a tween to the active set.
    ///
    /// The tween begins interpolating on the next [`advance`](Self::advance).
    pub fn start(&mut self, tween: Tween) {
        self.active.push(tween);
    }

    /// Advances every unpaused tween by `delta` seconds.
    ///
    /// Finished tweens are dropped; their chains join the active set and
    /// begin on the following advance.
    pub fn advance(&mut self, delta: f32) {
        let mut promoted = Vec::new();

        self.active.retain_mut(|tween| match tween.advance(delta) {
            TweenStep::Active => true,
            TweenStep::Finished => {
                if let Some(next) = tween.take_chain() {
                    promoted.push(*next);
                }
                false
            }
        });

        self.active.extend(promoted);
    }

    //--- Pause Control ----------------------------------------------------

    /// Pauses every active tween.
    pub fn pause_all(&mut self) {
        for tween in &mut self.active {
            tween.pause();
        }
    }

    /// Resumes every active tween.
    pub fn resume_all(&mut self) {
        for tween in &mut self.active {
            tween.resume();
        }
    }

    //--- Maintenance ------------------------------------------------------

    /// Discards every tween, chained follow-ups included.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

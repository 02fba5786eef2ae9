//! Scroll-reveal latch.
//!
//! DESIGN
//! ======
//! Each observed element gets a `ScrollReveal` that starts `Unrevealed` and
//! moves to `Revealed` the first time the host reports an intersecting
//! entry. There is no way back: later entries, intersecting or not, are
//! ignored. This is the "animate in once and stay" pattern.
//!
//! The viewport facility sits behind `ViewportObserver` so the latch can be
//! driven by `IntersectionObserver` in the browser and by a scripted host in
//! tests. Dropping an observation handle cancels it.
//!
//! If the host has no intersection facility at all, the element is revealed
//! immediately (fail open) since the effect is purely cosmetic.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::Cell;
use std::rc::Rc;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Observation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    root_margin: Option<String>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, root_margin: None }
    }
}

impl RevealOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of the element that must be visible. Clamped to `[0, 1]`;
    /// non-finite input keeps the default.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        self
    }

    /// CSS-style margin around the viewport, e.g. `"0px 0px -50px 0px"`.
    #[must_use]
    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        let margin = margin.into();
        self.root_margin = if margin.trim().is_empty() { None } else { Some(margin) };
        self
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn root_margin(&self) -> Option<&str> {
        self.root_margin.as_deref()
    }
}

/// One intersection notification from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionEntry {
    #[must_use]
    pub fn entering(ratio: f64) -> Self {
        Self { is_intersecting: true, ratio }
    }

    #[must_use]
    pub fn leaving() -> Self {
        Self { is_intersecting: false, ratio: 0.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealLatch {
    #[default]
    Unrevealed,
    Revealed,
}

impl RevealLatch {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }

    /// Feed one entry. Returns `true` only on the `Unrevealed -> Revealed`
    /// transition.
    pub fn observe(&mut self, entry: IntersectionEntry) -> bool {
        if entry.is_intersecting {
            self.reveal()
        } else {
            false
        }
    }

    /// Force the transition. Returns `true` if this call performed it.
    pub fn reveal(&mut self) -> bool {
        match self {
            Self::Unrevealed => {
                *self = Self::Revealed;
                true
            }
            Self::Revealed => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("intersection observation is not available on this host")]
pub struct ViewportUnavailable;

/// Host facility that reports element/viewport intersections.
pub trait ViewportObserver {
    type Target: ?Sized;
    /// Live observation; dropping it must stop all further callbacks.
    type Observation;

    /// Start observing `target`, delivering entries to `on_entry`.
    ///
    /// # Errors
    ///
    /// Returns `ViewportUnavailable` when the host cannot observe at all.
    fn observe(
        &self,
        target: &Self::Target,
        options: &RevealOptions,
        on_entry: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Result<Self::Observation, ViewportUnavailable>;
}

/// Per-element reveal state, owned by the component that created it.
pub struct ScrollReveal<V: ViewportObserver> {
    viewport: V,
    options: RevealOptions,
    latch: Rc<Cell<RevealLatch>>,
    observation: Option<V::Observation>,
}

impl<V: ViewportObserver> ScrollReveal<V> {
    /// Create an unbound, unrevealed handle.
    pub fn attach(viewport: V, options: RevealOptions) -> Self {
        Self { viewport, options, latch: Rc::new(Cell::new(RevealLatch::Unrevealed)), observation: None }
    }

    pub fn is_visible(&self) -> bool {
        self.latch.get().is_revealed()
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    /// Begin observing `target`. `on_reveal` runs once, on the transition.
    ///
    /// Any previous observation is cancelled first. An already revealed
    /// handle has nothing left to observe.
    pub fn bind(&mut self, target: &V::Target, on_reveal: impl Fn() + 'static) {
        self.detach();
        if self.is_visible() {
            return;
        }

        let on_reveal: Rc<dyn Fn()> = Rc::new(on_reveal);
        let latch = Rc::clone(&self.latch);
        let notify = Rc::clone(&on_reveal);
        let on_entry = Box::new(move |entry: IntersectionEntry| {
            let mut state = latch.get();
            if state.observe(entry) {
                log::debug!("scroll reveal: revealed at ratio {:.2}", entry.ratio);
                latch.set(state);
                notify();
            }
        });

        match self.viewport.observe(target, &self.options, on_entry) {
            Ok(observation) => self.observation = Some(observation),
            Err(err) => {
                log::warn!("scroll reveal: {err}; showing element immediately");
                let mut state = self.latch.get();
                if state.reveal() {
                    self.latch.set(state);
                    on_reveal();
                }
            }
        }
    }

    /// Cancel observation. Safe to call whether or not anything was bound.
    pub fn detach(&mut self) {
        self.observation.take();
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::geometry::Geometry;

/// Easing curves for attribute interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
}

impl Easing {
    /// Maps normalized linear time into eased time; both in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => t * (2.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Duration/delay/easing for one logical transition window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionBehavior {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for TransitionBehavior {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            delay_ms: 0.0,
            easing: Easing::default(),
        }
    }
}

impl TransitionBehavior {
    /// Instant transitions, useful for tests and aria-live consumers.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            duration_ms: 0.0,
            delay_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

fn default_duration_ms() -> f64 {
    350.0
}

/// Why a transition was scheduled; exits detach their element on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Enter,
    Update,
    Exit,
}

/// One in-flight interpolation from a starting geometry toward a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub from: Geometry,
    pub to: Geometry,
    pub scheduled_at_ms: f64,
    pub behavior: TransitionBehavior,
}

impl Transition {
    fn progress(&self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.scheduled_at_ms - self.behavior.delay_ms;
        if elapsed <= 0.0 {
            return 0.0;
        }
        if self.behavior.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed / self.behavior.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased geometry at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> Geometry {
        let t = self.behavior.easing.apply(self.progress(now_ms));
        self.from.lerp(self.to, t)
    }

    /// Complete only after the full delay+duration window elapsed.
    #[must_use]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        now_ms - self.scheduled_at_ms >= self.behavior.delay_ms + self.behavior.duration_ms
    }
}

/// Progress report for one key produced by [`TransitionTimeline::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineFrame {
    pub key: String,
    pub kind: TransitionKind,
    pub geometry: Geometry,
    pub finished: bool,
}

/// Cooperative, clock-driven transition table keyed by item identity.
///
/// Scheduling a transition for a key that already has one in flight
/// supersedes it (last-writer-wins, no queueing); keys untouched by a new
/// reconciliation pass keep their transitions running.
#[derive(Debug, Clone, Default)]
pub struct TransitionTimeline {
    active: IndexMap<String, Transition>,
}

impl TransitionTimeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: impl Into<String>, transition: Transition) {
        self.active.insert(key.into(), transition);
    }

    pub fn cancel(&mut self, key: &str) -> Option<Transition> {
        self.active.shift_remove(key)
    }

    #[must_use]
    pub fn in_flight(&self, key: &str) -> Option<&Transition> {
        self.active.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Samples every in-flight transition at `now_ms` and drops completed
    /// ones. Frames are emitted in scheduling order.
    pub fn advance(&mut self, now_ms: f64) -> Vec<TimelineFrame> {
        let mut frames = Vec::with_capacity(self.active.len());
        for (key, transition) in &self.active {
            frames.push(TimelineFrame {
                key: key.clone(),
                kind: transition.kind,
                geometry: transition.sample(now_ms),
                finished: transition.is_complete(now_ms),
            });
        }
        self.active.retain(|_, transition| !transition.is_complete(now_ms));
        frames
    }
}

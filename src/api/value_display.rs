use crate::core::record::{Record, by_key};
use crate::render::geometry::interpolate_number;
use crate::render::transition::{Easing, TransitionBehavior};

/// Single animated number readout.
///
/// The displayed value tweens from the previously shown value to each new
/// target; before the first update there is no previous value, which the
/// interpolation guard maps to 0 so the readout counts up instead of
/// flashing a non-finite frame.
#[derive(Debug, Clone)]
pub struct ValueDisplay {
    behavior: TransitionBehavior,
    last_value: f64,
    pending: Option<PendingChange>,
}

#[derive(Debug, Clone, Copy)]
struct PendingChange {
    from: f64,
    to: f64,
    scheduled_at_ms: f64,
}

impl Default for ValueDisplay {
    fn default() -> Self {
        Self {
            behavior: TransitionBehavior::default()
                .with_duration_ms(250.0)
                .with_easing(Easing::QuadInOut),
            last_value: f64::NAN,
            pending: None,
        }
    }
}

impl ValueDisplay {
    #[must_use]
    pub fn new(behavior: TransitionBehavior) -> Self {
        Self {
            behavior,
            last_value: f64::NAN,
            pending: None,
        }
    }

    /// The value the display is heading toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        match self.pending {
            Some(change) => change.to,
            None if self.last_value.is_finite() => self.last_value,
            None => 0.0,
        }
    }

    /// Retargets the readout at logical time `now_ms`.
    ///
    /// A retarget mid-flight starts from the currently displayed value, so
    /// rapid updates never jump.
    pub fn update(&mut self, value: f64, now_ms: f64) {
        let from = self.displayed(now_ms);
        self.pending = Some(PendingChange {
            from,
            to: value,
            scheduled_at_ms: now_ms,
        });
        self.last_value = value;
    }

    /// The value shown at logical time `now_ms`.
    #[must_use]
    pub fn displayed(&self, now_ms: f64) -> f64 {
        let Some(change) = self.pending else {
            return if self.last_value.is_finite() {
                self.last_value
            } else {
                0.0
            };
        };

        let elapsed = now_ms - change.scheduled_at_ms - self.behavior.delay_ms;
        if elapsed <= 0.0 {
            return interpolate_number(change.from, change.to, 0.0);
        }
        if self.behavior.duration_ms <= 0.0 || elapsed >= self.behavior.duration_ms {
            return change.to;
        }
        let t = self.behavior.easing.apply(elapsed / self.behavior.duration_ms);
        interpolate_number(change.from, change.to, t)
    }
}

/// The record whose key sorts last, typically the most recent time bin.
#[must_use]
pub fn latest_bin(records: &[Record]) -> Option<&Record> {
    let ordering = by_key();
    records.iter().max_by(|a, b| ordering(a, b))
}

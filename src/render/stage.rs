use indexmap::IndexMap;
use tracing::debug;

use crate::core::record::Record;
use crate::render::geometry::Geometry;
use crate::render::reconcile::{Keyed, KeyDiff, diff_keys};
use crate::render::surface::DrawSurface;
use crate::render::transition::{
    Transition, TransitionBehavior, TransitionKind, TransitionTimeline,
};

/// Lifecycle phase of a visual item: Absent -> Entering -> Steady ->
/// Exiting -> Absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    Entering,
    Steady,
    Exiting,
}

/// Desired end state for one keyed element, produced by a chart model.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetItem {
    pub key: String,
    pub geometry: Geometry,
    pub record: Record,
}

impl TargetItem {
    #[must_use]
    pub fn new(key: impl Into<String>, geometry: Geometry, record: Record) -> Self {
        Self {
            key: key.into(),
            geometry,
            record,
        }
    }
}

impl Keyed for TargetItem {
    fn key(&self) -> &str {
        &self.key
    }
}

/// A keyed element persisted across reconciliation passes.
///
/// `geometry` is the last rendered state; its `display_value` starts
/// non-finite so the first interpolation animates up from 0 instead of
/// propagating the uninitialized value. The state is owned by the item and
/// dies with it when its exit completes.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualItem {
    pub key: String,
    pub geometry: Geometry,
    pub phase: ItemPhase,
    pub record: Record,
}

impl Keyed for VisualItem {
    fn key(&self) -> &str {
        &self.key
    }
}

/// Counts and keys of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReconcileSummary {
    pub entered: Vec<String>,
    pub updated: Vec<String>,
    pub exited: Vec<String>,
}

/// Keyed incremental renderer: diffs target items against the persistent
/// item set and drives interpolated transitions onto a [`DrawSurface`].
///
/// One stage belongs to one chart instance; passes are serialized by
/// `&mut self`. A new pass supersedes in-flight transitions only for the
/// keys it touches.
#[derive(Debug, Default)]
pub struct RenderStage {
    items: IndexMap<String, VisualItem>,
    timeline: TransitionTimeline,
}

impl RenderStage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn item(&self, key: &str) -> Option<&VisualItem> {
        self.items.get(key)
    }

    #[must_use]
    pub fn items(&self) -> impl Iterator<Item = &VisualItem> {
        self.items.values()
    }

    /// True when no transitions are in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Runs one reconciliation pass at logical time `now_ms`.
    ///
    /// The enter/update/exit sets are computed from one snapshot of old vs.
    /// new keys before any transition is scheduled.
    pub fn reconcile(
        &mut self,
        targets: &[TargetItem],
        now_ms: f64,
        behavior: TransitionBehavior,
        surface: &mut dyn DrawSurface,
    ) -> ReconcileSummary {
        let diff: KeyDiff = diff_keys(
            self.items.keys().map(String::as_str),
            targets.iter().map(|target| target.key.as_str()),
        );
        debug!(
            enter = diff.enter.len(),
            update = diff.update.len(),
            exit = diff.exit.len(),
            "reconciliation pass"
        );

        let by_key: IndexMap<&str, &TargetItem> = targets
            .iter()
            .map(|target| (target.key.as_str(), target))
            .collect();

        for key in &diff.enter {
            let Some(&target) = by_key.get(key.as_str()) else {
                continue;
            };
            let start = enter_start(target.geometry);
            self.items.insert(
                key.clone(),
                VisualItem {
                    key: key.clone(),
                    geometry: start,
                    phase: ItemPhase::Entering,
                    record: target.record.clone(),
                },
            );
            surface.create_element(key, start);
            self.timeline.schedule(
                key.clone(),
                Transition {
                    kind: TransitionKind::Enter,
                    from: start,
                    to: target.geometry,
                    scheduled_at_ms: now_ms,
                    behavior,
                },
            );
        }

        for key in &diff.update {
            let Some(&target) = by_key.get(key.as_str()) else {
                continue;
            };
            let Some(item) = self.items.get_mut(key) else {
                continue;
            };
            if item.phase == ItemPhase::Exiting {
                item.phase = ItemPhase::Steady;
            }
            item.record = target.record.clone();
            self.timeline.schedule(
                key.clone(),
                Transition {
                    kind: TransitionKind::Update,
                    from: item.geometry,
                    to: target.geometry,
                    scheduled_at_ms: now_ms,
                    behavior,
                },
            );
        }

        for key in &diff.exit {
            let Some(item) = self.items.get_mut(key) else {
                continue;
            };
            item.phase = ItemPhase::Exiting;
            self.timeline.schedule(
                key.clone(),
                Transition {
                    kind: TransitionKind::Exit,
                    from: item.geometry,
                    to: exit_target(item.geometry),
                    scheduled_at_ms: now_ms,
                    behavior,
                },
            );
        }

        ReconcileSummary {
            entered: diff.enter,
            updated: diff.update,
            exited: diff.exit,
        }
    }

    /// Advances the shared clock: samples in-flight transitions, pushes
    /// geometry to the surface, and detaches items whose exit window
    /// (delay + duration) has fully elapsed.
    pub fn advance(&mut self, now_ms: f64, surface: &mut dyn DrawSurface) {
        for frame in self.timeline.advance(now_ms) {
            let Some(item) = self.items.get_mut(&frame.key) else {
                continue;
            };
            item.geometry = frame.geometry;
            surface.set_geometry(&frame.key, frame.geometry);

            if frame.finished {
                match frame.kind {
                    TransitionKind::Enter | TransitionKind::Update => {
                        item.phase = ItemPhase::Steady;
                    }
                    TransitionKind::Exit => {
                        surface.remove_element(&frame.key);
                        self.items.shift_remove(&frame.key);
                    }
                }
            }
        }
    }
}

fn enter_start(target: Geometry) -> Geometry {
    Geometry::new(target.x, target.y, 0.0, 0.0)
        .with_opacity(0.0)
        .with_display_value(f64::NAN)
}

fn exit_target(current: Geometry) -> Geometry {
    Geometry::new(current.x, current.y, 0.0, 0.0)
        .with_opacity(0.0)
        .with_display_value(0.0)
}

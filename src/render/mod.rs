pub mod geometry;
pub mod reconcile;
pub mod stage;
pub mod surface;
pub mod transition;

pub use geometry::{Geometry, interpolate_number};
pub use reconcile::{KeyDiff, Keyed, ReconcileDiff, diff_keys, reconcile};
pub use stage::{ItemPhase, ReconcileSummary, RenderStage, TargetItem, VisualItem};
pub use surface::{DrawSurface, NullSurface, RecordingSurface, SurfaceOp};
pub use transition::{
    Easing, TimelineFrame, Transition, TransitionBehavior, TransitionKind, TransitionTimeline,
};

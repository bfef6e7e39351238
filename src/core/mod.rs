pub mod cap;
pub mod hierarchy;
pub mod printers;
pub mod proximity;
pub mod record;
pub mod scale;
pub mod treemap;
pub mod types;

pub use cap::{CapBehavior, MeanOthersGrouper, OthersGrouper, aggregate_capped};
pub use hierarchy::{NodeId, OTHERS_ROOT_KEY, SUPER_ROOT_KEY, Tree, TreeNode};
pub use proximity::{ProximityIndex, ProximityItem, SeriesId};
pub use record::{Record, by_key, by_value};
pub use scale::{BandScale, LinearScale};
pub use treemap::{Rect, TreemapLayout};
pub use types::Viewport;

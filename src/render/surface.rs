use crate::render::geometry::Geometry;

/// Drawing surface contract the reconciler drives.
///
/// The core never paints pixels; a backend implements element creation,
/// geometry updates, and removal however it likes.
pub trait DrawSurface {
    fn create_element(&mut self, key: &str, geometry: Geometry);
    fn set_geometry(&mut self, key: &str, geometry: Geometry);
    fn remove_element(&mut self, key: &str);
}

/// No-op surface used by tests and headless usage.
#[derive(Debug, Default, Clone)]
pub struct NullSurface {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

impl DrawSurface for NullSurface {
    fn create_element(&mut self, _key: &str, _geometry: Geometry) {
        self.created += 1;
    }

    fn set_geometry(&mut self, _key: &str, _geometry: Geometry) {
        self.updated += 1;
    }

    fn remove_element(&mut self, _key: &str) {
        self.removed += 1;
    }
}

/// One recorded surface operation, for assertions on operation order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Create { key: String, geometry: Geometry },
    SetGeometry { key: String, geometry: Geometry },
    Remove { key: String },
}

impl SurfaceOp {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Create { key, .. } | Self::SetGeometry { key, .. } | Self::Remove { key } => key,
        }
    }
}

/// Surface that records every operation it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ops_for(&self, key: &str) -> Vec<&SurfaceOp> {
        self.ops.iter().filter(|op| op.key() == key).collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn create_element(&mut self, key: &str, geometry: Geometry) {
        self.ops.push(SurfaceOp::Create {
            key: key.to_owned(),
            geometry,
        });
    }

    fn set_geometry(&mut self, key: &str, geometry: Geometry) {
        self.ops.push(SurfaceOp::SetGeometry {
            key: key.to_owned(),
            geometry,
        });
    }

    fn remove_element(&mut self, key: &str) {
        self.ops.push(SurfaceOp::Remove {
            key: key.to_owned(),
        });
    }
}

//! Discrete panning of the viewer's world offset.

use glam::Vec3;
use hexscape_coords::AxialPosition;
use hexscape_mesh::chunk_span;

/// World units moved per pan command.
pub const DEFAULT_PAN_STEP: f32 = 10.0;

/// Direction of a single pan step on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    /// Towards `-X`.
    Left,
    /// Towards `+X`.
    Right,
    /// Towards `-Z`.
    Forward,
    /// Towards `+Z`.
    Back,
}

impl PanDirection {
    /// Unit vector on the ground plane.
    pub fn unit(self) -> Vec3 {
        match self {
            PanDirection::Left => Vec3::NEG_X,
            PanDirection::Right => Vec3::X,
            PanDirection::Forward => Vec3::NEG_Z,
            PanDirection::Back => Vec3::Z,
        }
    }
}

/// The viewer's pan offset.
///
/// The chunk width is not stored here: it belongs to the
/// [`ChunkGenerator`](crate::ChunkGenerator) and is passed to
/// [`focus_chunk`](Self::focus_chunk).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraController {
    offset: Vec3,
    step: f32,
}

impl CameraController {
    pub fn new(step: f32) -> Self {
        Self {
            offset: Vec3::ZERO,
            step,
        }
    }

    /// Returns a controller moved one step in `direction`.
    #[must_use]
    pub fn pan(self, direction: PanDirection) -> Self {
        Self {
            offset: self.offset + direction.unit() * self.step,
            ..self
        }
    }

    /// Returns a controller with the given offset.
    #[must_use]
    pub fn with_offset(self, offset: Vec3) -> Self {
        Self { offset, ..self }
    }

    /// Current world-space pan offset.
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Chunk coordinate nearest to the offset for chunks `chunk_width` cells wide.
    ///
    /// `x = round(offset.x / span_x / 2)`, `y = round(offset.z / span_z)`, where
    /// the spans are one chunk's world extent. Halves round away from zero.
    pub fn focus_chunk(&self, chunk_width: u32) -> AxialPosition {
        let (span_x, span_z) = chunk_span(chunk_width);
        let x = (self.offset.x / span_x / 2.0).round() as i32;
        let y = (self.offset.z / span_z).round() as i32;
        AxialPosition::new(x, y)
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(DEFAULT_PAN_STEP)
    }
}

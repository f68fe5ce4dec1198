use serde::{Deserialize, Serialize};

/// Pixel dimensions of the plot surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Pixel length available to the axis of the given id.
    #[must_use]
    pub fn length_along(self, axis: AxisId) -> f64 {
        match axis {
            AxisId::X => f64::from(self.width),
            AxisId::Y => f64::from(self.height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn coordinate(self, axis: AxisId) -> f64 {
        match axis {
            AxisId::X => self.x,
            AxisId::Y => self.y,
        }
    }
}

/// Direction an axis runs on screen.
///
/// Vertical axes grow upward in data space while pixel rows grow downward,
/// so their scale is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Identifies one of the two axes of a Cartesian viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisId {
    X,
    Y,
}

impl AxisId {
    pub const BOTH: [AxisId; 2] = [AxisId::X, AxisId::Y];

    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            Self::X => Orientation::Horizontal,
            Self::Y => Orientation::Vertical,
        }
    }
}

//! Capacity limits for the slotted primitive kinds.

/// Hard cap on clipping planes: two 16-bit groups in the custom primitive data.
pub const MAX_CLIPPING_PLANES: usize = 32;

/// Hard cap on clipping boxes: two 16-bit groups in the custom primitive data.
pub const MAX_CLIPPING_BOXES: usize = 32;

/// Per-world capacity, passed explicitly to [`ClippingTool::new`](crate::ClippingTool::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClippingLimits {
    max_planes: usize,
    max_boxes: usize,
}

impl ClippingLimits {
    /// Values above the hard caps are clamped.
    pub fn new(max_planes: usize, max_boxes: usize) -> Self {
        Self {
            max_planes: max_planes.min(MAX_CLIPPING_PLANES),
            max_boxes: max_boxes.min(MAX_CLIPPING_BOXES),
        }
    }

    /// Number of plane slots available.
    pub fn max_planes(&self) -> usize {
        self.max_planes
    }

    /// Number of box slots available.
    pub fn max_boxes(&self) -> usize {
        self.max_boxes
    }
}

impl Default for ClippingLimits {
    fn default() -> Self {
        Self::new(MAX_CLIPPING_PLANES, MAX_CLIPPING_BOXES)
    }
}

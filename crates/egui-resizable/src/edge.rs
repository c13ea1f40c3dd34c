use egui::Align;

/// Side of the panel that carries the drag handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ControlEdge {
    Left,
    Right,
}

impl ControlEdge {
    /// Horizontal alignment of the content area inside the panel row.
    pub fn content_align(self) -> Align {
        match self {
            ControlEdge::Left => Align::Max,
            ControlEdge::Right => Align::Min,
        }
    }

    /// Width change produced by a horizontal pointer translation.
    ///
    /// Dragging away from the panel body always grows the panel, so the sign
    /// flips for the left edge.
    #[inline]
    pub fn width_change(self, translation: f32) -> f32 {
        match self {
            ControlEdge::Left => -translation,
            ControlEdge::Right => translation,
        }
    }
}

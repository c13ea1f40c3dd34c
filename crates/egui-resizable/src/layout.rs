use crate::edge::ControlEdge;
use egui::{Rect, Vec2};

/// Where the content area and the drag handle land inside the panel row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelLayout {
    pub content: Rect,
    pub handle: Rect,
}

impl PanelLayout {
    /// Places a `width` wide content area and a `handle_size` handle inside `row`.
    ///
    /// The handle sits flush against `edge` of the row, vertically centred. The
    /// content area follows the edge's alignment and spans the full row height.
    pub fn compute(row: Rect, width: f32, handle_size: Vec2, edge: ControlEdge) -> Self {
        let content_x = match edge {
            ControlEdge::Left => row.right() - width,
            ControlEdge::Right => row.left(),
        };
        let content = Rect::from_min_size(
            egui::pos2(content_x, row.top()),
            Vec2::new(width, row.height()),
        );

        let handle_x = match edge {
            ControlEdge::Left => row.left(),
            ControlEdge::Right => row.right() - handle_size.x,
        };
        let handle = Rect::from_min_size(
            egui::pos2(handle_x, row.center().y - handle_size.y * 0.5),
            handle_size,
        );

        Self { content, handle }
    }
}

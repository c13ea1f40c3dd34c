use crate::animation::HandleVisual;
use egui::{Color32, CursorIcon, Id, Rect, Response, Sense, Ui};

/// The grip on the control edge that the user drags to resize the panel.
pub struct DragHandle {
    pub rect: Rect,
    pub color: Color32,
    pub corner_radius: f32,
}

impl DragHandle {
    pub fn new(rect: Rect, color: Color32, corner_radius: f32) -> Self {
        Self {
            rect,
            color,
            corner_radius,
        }
    }

    /// Senses drags over the unscaled handle rect.
    pub fn interact(&self, id: Id, ui: &mut Ui) -> Response {
        ui.interact(self.rect, id, Sense::drag())
            .on_hover_and_drag_cursor(CursorIcon::ResizeHorizontal)
    }

    /// Rect the handle occupies on screen once `visual` is applied.
    pub fn painted_rect(&self, visual: HandleVisual) -> Rect {
        Rect::from_center_size(self.rect.center(), self.rect.size() * visual.scale)
    }

    pub fn paint(&self, visual: HandleVisual, ui: &Ui) {
        ui.painter().rect_filled(
            self.painted_rect(visual),
            self.corner_radius,
            self.color.gamma_multiply(visual.opacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::DragHandle;
    use crate::animation::HandleVisual;
    use egui::{pos2, vec2, Color32, Rect};

    #[test]
    fn scale_grows_around_center() {
        let handle = DragHandle::new(
            Rect::from_min_size(pos2(0.0, 0.0), vec2(8.0, 100.0)),
            Color32::GRAY,
            10.0,
        );

        let resting = handle.painted_rect(HandleVisual::RESTING);
        assert_eq!(resting, handle.rect);

        let dragging = handle.painted_rect(HandleVisual::DRAGGING);
        assert_eq!(dragging.size(), vec2(16.0, 200.0));
        assert_eq!(dragging.center(), handle.rect.center());
    }
}

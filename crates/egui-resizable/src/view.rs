use crate::edge::ControlEdge;
use crate::errors::PanelError;
use crate::handle::DragHandle;
use crate::layout::PanelLayout;
use crate::options::PanelOptions;
use crate::state::{DragOutcome, PanelState};
use egui::{Align2, Context, Id, InnerResponse, Layout, Sense, Ui, UiBuilder, Vec2};
use std::hash::Hash;

/// A container whose width the user changes by dragging a handle on one edge.
///
/// The width is borrowed from the caller and written back whenever a drag
/// lands inside `[min width, max width]`. The min width is the width the
/// panel had the first time it was shown; a panel skipped for a whole pass
/// is remounted and captures it again. The content area never renders
/// outside `[min width, max width]`. When the panel writes the width, the
/// returned response reports `changed()`.
pub struct ResizablePanel<'a> {
    width: &'a mut f32,
    max_width: f32,
    control_edge: ControlEdge,
    content_alignment: Align2,
    id_salt: Id,
    options: PanelOptions,
}

impl<'a> ResizablePanel<'a> {
    pub fn new(
        width: &'a mut f32,
        max_width: f32,
        control_edge: ControlEdge,
    ) -> Result<Self, PanelError> {
        PanelError::check(*width, max_width)?;

        Ok(Self {
            width,
            max_width,
            control_edge,
            content_alignment: Align2::CENTER_CENTER,
            id_salt: Id::new("resizable_panel"),
            options: PanelOptions::default(),
        })
    }

    #[inline]
    pub fn content_alignment(mut self, alignment: Align2) -> Self {
        self.content_alignment = alignment;
        self
    }

    /// Needed when more than one panel lives in the same [`Ui`].
    #[inline]
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    #[inline]
    pub fn options(mut self, options: PanelOptions) -> Self {
        self.options = options;
        self
    }

    pub fn id(&self, ui: &Ui) -> Id {
        ui.make_persistent_id(self.id_salt)
    }

    /// Lower bound captured when the panel with `id` was first shown.
    pub fn min_width(ctx: &Context, id: Id) -> Option<f32> {
        PanelState::load(ctx, id).and_then(|state| state.min_width())
    }

    /// Forgets the panel with `id`; showing it again captures a new min width.
    pub fn unmount(ctx: &Context, id: Id) {
        PanelState::remove(ctx, id);
    }

    pub fn show<R>(
        self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> InnerResponse<R> {
        let id = self.id(ui);
        let now = ui.input(|i| i.time);
        let pass = ui.ctx().cumulative_pass_nr();
        let mut state = PanelState::load(ui.ctx(), id)
            .filter(|state| !state.is_stale(pass))
            .unwrap_or_else(|| PanelState::mounted(*self.width));
        state.mark_shown(pass);

        let min_width = state.min_width().unwrap_or(*self.width);
        let shown_width = self.width.max(min_width).min(self.max_width);

        let row_size = Vec2::new(
            ui.available_width(),
            ui.available_height().max(self.options.min_height),
        );
        let (row, mut response) = ui.allocate_exact_size(row_size, Sense::hover());
        let layout = PanelLayout::compute(
            row,
            shown_width,
            self.options.handle_size,
            self.control_edge,
        );

        ui.painter().rect_filled(
            layout.content,
            self.options.corner_radius,
            self.options.content_fill,
        );
        let mut content_ui = ui.new_child(
            UiBuilder::new()
                .id_salt(id.with("content"))
                .max_rect(layout.content)
                .layout(
                    Layout::top_down(self.content_alignment.x())
                        .with_main_align(self.content_alignment.y()),
                ),
        );
        content_ui.set_clip_rect(layout.content.intersect(ui.clip_rect()));
        let inner = add_contents(&mut content_ui);

        // interacted after the content so the handle wins hit tests
        let handle = DragHandle::new(
            layout.handle,
            self.options.handle_color,
            self.options.corner_radius,
        );
        let handle_response = handle.interact(id.with("handle"), ui);

        let duration = self.options.animation_duration;
        if handle_response.drag_started() {
            state.drag_started(*self.width, self.options.dragging_visual, now, duration);
        }
        let mut changed = false;
        if handle_response.dragged() {
            let delta = handle_response.drag_delta().x;
            if delta != 0.0 {
                changed = state.drag_changed(self.width, delta, self.max_width, self.control_edge)
                    == DragOutcome::Applied;
            }
        }
        if handle_response.drag_stopped() {
            state.drag_ended(now, duration);
        }

        handle.paint(state.tween.sample(now), ui);
        if state.tween.is_animating(now) {
            ui.ctx().request_repaint();
        }

        state.store(ui.ctx(), id);

        response = response.union(handle_response);
        if changed {
            response.mark_changed();
        }
        InnerResponse::new(inner, response)
    }
}

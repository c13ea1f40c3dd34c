use crate::animation::{HandleTween, HandleVisual};
use crate::edge::ControlEdge;
use egui::{Context, Id};
use tracing::{debug, trace};

/// One press-drag-release sequence on the handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragSession {
    /// Width when the gesture started.
    pub origin_width: f32,
    /// Horizontal pointer displacement since the gesture started.
    pub translation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragOutcome {
    Applied,
    Rejected,
}

/// What a panel remembers between frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PanelState {
    min_width: Option<f32>,
    /// Pass in which the panel was last shown.
    last_pass: u64,
    pub drag: Option<DragSession>,
    pub tween: HandleTween,
}

impl PanelState {
    pub fn load(ctx: &Context, id: Id) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp::<Self>(id))
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    pub fn remove(ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.remove_temp::<Self>(id));
    }

    /// Fresh state for a panel appearing with `width`.
    pub fn mounted(width: f32) -> Self {
        let mut state = Self::default();
        state.capture_min_width(width);
        state
    }

    pub fn min_width(&self) -> Option<f32> {
        self.min_width
    }

    /// Records `width` as the lower bound unless one was already captured.
    pub fn capture_min_width(&mut self, width: f32) {
        if self.min_width.is_none() {
            debug!("captured min width {width}");
            self.min_width = Some(width);
        }
    }

    /// A panel skipped for a whole pass has been unmounted by its host.
    pub fn is_stale(&self, pass: u64) -> bool {
        pass > self.last_pass + 1
    }

    pub fn mark_shown(&mut self, pass: u64) {
        self.last_pass = pass;
    }

    pub fn drag_started(&mut self, width: f32, visual: HandleVisual, now: f64, duration: f32) {
        debug!("drag started at width {width}");
        self.drag = Some(DragSession {
            origin_width: width,
            translation: 0.0,
        });
        self.tween.retarget(visual, now, duration);
    }

    /// Feeds one frame of horizontal pointer movement into the current gesture.
    ///
    /// The candidate width is the gesture's origin width moved by the total
    /// translation so far. It is written into `width` only when it lies within
    /// `[min, max_width]`; otherwise `width` stays untouched.
    pub fn drag_changed(
        &mut self,
        width: &mut f32,
        delta_x: f32,
        max_width: f32,
        edge: ControlEdge,
    ) -> DragOutcome {
        let session = self.drag.get_or_insert(DragSession {
            origin_width: *width,
            translation: 0.0,
        });
        session.translation += delta_x;

        let candidate = session.origin_width + edge.width_change(session.translation);
        let min = self.min_width.unwrap_or(*width);

        if candidate >= min && candidate <= max_width {
            *width = candidate;
            DragOutcome::Applied
        } else {
            trace!("rejected width {candidate}, allowed range [{min}, {max_width}]");
            DragOutcome::Rejected
        }
    }

    pub fn drag_ended(&mut self, now: f64, duration: f32) {
        if let Some(session) = self.drag.take() {
            debug!("drag ended after translation {}", session.translation);
        }
        self.tween.retarget(HandleVisual::RESTING, now, duration);
    }
}

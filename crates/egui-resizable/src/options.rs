use crate::animation::HandleVisual;
use egui::{Color32, Vec2};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelOptions {
    pub handle_size: Vec2,
    pub handle_color: Color32,
    pub corner_radius: f32,
    /// Shortest the panel row gets, whatever height the parent offers.
    pub min_height: f32,
    /// Background of the content area, transparent by default.
    pub content_fill: Color32,
    /// Seconds the handle takes to change presentation.
    pub animation_duration: f32,
    pub dragging_visual: HandleVisual,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            handle_size: Vec2::new(PanelOptions::HANDLE_WIDTH, PanelOptions::HANDLE_HEIGHT),
            handle_color: Color32::GRAY,
            corner_radius: 10.0,
            min_height: PanelOptions::MIN_HEIGHT,
            content_fill: Color32::TRANSPARENT,
            animation_duration: 0.1,
            dragging_visual: HandleVisual::DRAGGING,
        }
    }
}

impl PanelOptions {
    pub const HANDLE_WIDTH: f32 = 8.0;
    pub const HANDLE_HEIGHT: f32 = 100.0;
    pub const MIN_HEIGHT: f32 = 100.0;

    #[inline]
    pub fn content_fill(mut self, fill: Color32) -> Self {
        self.content_fill = fill;
        self
    }

    #[inline]
    pub fn handle_color(mut self, color: Color32) -> Self {
        self.handle_color = color;
        self
    }
}

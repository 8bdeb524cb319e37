//! Immediate-mode drawing primitives for HUD widgets.
//!
//! Widgets talk to [`BarRenderer`] rather than to egui directly, so the draw
//! path can be replayed into a [`RecordingRenderer`] in tests and benches.

use bevy_egui::egui;

use crate::chrome::ChromeImage;

/// Renderer service consumed by HUD widgets.
pub trait BarRenderer {
    /// Fill an axis-aligned screen-space rectangle.
    fn fill_rect(&mut self, rect: egui::Rect, color: egui::Color32);
    /// Draw `image` with its top-left corner at `pos`, at native size.
    fn draw_sprite(&mut self, image: &ChromeImage, pos: egui::Pos2);
}

// =============================================================================
// egui painter backend
// =============================================================================

/// Draws straight into an egui layer.
pub struct PainterRenderer<'a> {
    painter: &'a egui::Painter,
}

impl<'a> PainterRenderer<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl BarRenderer for PainterRenderer<'_> {
    fn fill_rect(&mut self, rect: egui::Rect, color: egui::Color32) {
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn draw_sprite(&mut self, image: &ChromeImage, pos: egui::Pos2) {
        let rect = egui::Rect::from_min_size(pos, image.size);
        self.painter
            .image(image.texture, rect, image.uv, egui::Color32::WHITE);
    }
}

// =============================================================================
// Recording backend
// =============================================================================

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        rect: egui::Rect,
        color: egui::Color32,
    },
    Sprite {
        texture: egui::TextureId,
        size: egui::Vec2,
        pos: egui::Pos2,
    },
}

/// Keeps every draw call in order instead of rendering it.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// All `FillRect` calls, in order.
    pub fn filled_rects(&self) -> Vec<(egui::Rect, egui::Color32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillRect { rect, color } => Some((*rect, *color)),
                DrawCall::Sprite { .. } => None,
            })
            .collect()
    }

    /// Positions of all `Sprite` calls, in order.
    pub fn sprite_positions(&self) -> Vec<egui::Pos2> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Sprite { pos, .. } => Some(*pos),
                DrawCall::FillRect { .. } => None,
            })
            .collect()
    }
}

impl BarRenderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: egui::Rect, color: egui::Color32) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn draw_sprite(&mut self, image: &ChromeImage, pos: egui::Pos2) {
        self.calls.push(DrawCall::Sprite {
            texture: image.texture,
            size: image.size,
            pos,
        });
    }
}

use bevy_egui::{egui, EguiContexts};

pub const FONT_BODY: f32 = 13.0;

pub const PANEL: egui::Color32 = egui::Color32::from_rgb(35, 37, 48);
pub const BAR_TRACK: egui::Color32 = egui::Color32::from_rgb(24, 26, 34);
pub const TOOLTIP_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(20, 20, 20, 220);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(225, 228, 235);

pub fn apply_hud_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = PANEL;
    style.visuals.panel_fill = PANEL;
    style.visuals.extreme_bg_color = BAR_TRACK;
    style.visuals.override_text_color = Some(TEXT);

    ctx.set_style(style);
}

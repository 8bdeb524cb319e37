//! Hosting the power bar in egui: layout, hover tracking, per-frame draw.

use bevy::log::warn_once;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::bar_renderer::PainterRenderer;
use rendering::chrome::ChromeProvider;
use simulation::power::PowerManager;

use super::config::PowerBarConfig;
use super::widget::PowerBarWidget;
use crate::theme;
use crate::tooltip_container::TooltipContainers;

/// Whether the pointer was over the bar last frame.
#[derive(Component, Debug, Default)]
pub struct PowerBarHover {
    pub hovered: bool,
}

impl PowerBarHover {
    /// Forward enter/exit edges to the widget.
    pub fn update(
        &mut self,
        hovered: bool,
        widget: &PowerBarWidget,
        tooltips: &mut TooltipContainers,
    ) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if hovered {
            debug!("Pointer entered power bar");
            widget.pointer_entered(tooltips);
        } else {
            debug!("Pointer left power bar");
            widget.pointer_exited(tooltips);
        }
    }
}

/// Builds the power bar for the local player. A failure aborts the app.
pub fn spawn_power_bar(world: &mut World) {
    let config = world
        .get_resource::<PowerBarConfig>()
        .cloned()
        .unwrap_or_default();

    match PowerBarWidget::new(world, &config) {
        Ok(widget) => {
            let actor = widget.power_actor();
            let bar = world
                .spawn((widget, PowerBarHover::default(), Name::new("PowerBar")))
                .id();
            info!("Spawned power bar {bar} for actor {actor}");
        }
        Err(err) => {
            error!("Power bar setup failed: {err}");
            world.send_event(AppExit::error());
        }
    }
}

/// Lays out and draws every power bar.
pub fn power_bar_ui(
    mut contexts: EguiContexts,
    config: Res<PowerBarConfig>,
    chrome: Res<ChromeProvider>,
    managers: Query<&PowerManager>,
    mut tooltips: ResMut<TooltipContainers>,
    mut bars: Query<(Entity, &mut PowerBarWidget, &mut PowerBarHover)>,
) {
    let ctx = contexts.ctx_mut();
    let size = egui::vec2(config.size[0], config.size[1]);
    let offset = egui::vec2(config.anchor_offset[0], config.anchor_offset[1]);

    for (entity, mut widget, mut hover) in &mut bars {
        let Ok(model) = managers.get(widget.power_actor()) else {
            warn_once!("Power bar {} lost its power model", entity);
            continue;
        };

        egui::Area::new(egui::Id::new(("power_bar", entity)))
            .anchor(egui::Align2::RIGHT_TOP, offset)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let (bounds, response) = ui.allocate_exact_size(size, egui::Sense::hover());
                let painter = ui.painter();
                painter.rect_filled(bounds, 0.0, theme::BAR_TRACK);

                hover.update(response.hovered(), &widget, &mut tooltips);
                widget.draw(
                    model,
                    bounds,
                    &chrome,
                    &mut PainterRenderer::new(painter),
                );
            });
    }
}

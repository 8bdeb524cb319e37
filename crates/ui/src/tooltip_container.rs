//! Named tooltip containers.
//!
//! Widgets register a tooltip on hover and clear it on exit; the container
//! renders whatever is active next to the pointer each frame. Text is produced
//! by a callback evaluated at render time, so it tracks live game state.

use bevy::log::warn_once;
use bevy::prelude::*;
use bevy::utils::HashMap;
use bevy_egui::{egui, EguiContexts};

use simulation::power::{PowerLookup, PowerManager};

use crate::theme;

pub const DEFAULT_TOOLTIP_CONTAINER: &str = "TOOLTIP_CONTAINER";

/// Single line of text in a popup frame.
pub const SIMPLE_TOOLTIP: &str = "SIMPLE_TOOLTIP";

// =============================================================================
// Types
// =============================================================================

type GetText = Box<dyn Fn(&dyn PowerLookup) -> String + Send + Sync>;

/// Arguments a widget passes along with its tooltip template.
pub struct TooltipArgs {
    get_text: GetText,
}

impl TooltipArgs {
    pub fn new(get_text: impl Fn(&dyn PowerLookup) -> String + Send + Sync + 'static) -> Self {
        Self {
            get_text: Box::new(get_text),
        }
    }

    pub fn text(&self, lookup: &dyn PowerLookup) -> String {
        (self.get_text)(lookup)
    }
}

/// The tooltip a container is currently showing.
pub struct ActiveTooltip {
    pub template: String,
    pub args: TooltipArgs,
}

#[derive(Default)]
pub struct TooltipContainer {
    active: Option<ActiveTooltip>,
}

impl TooltipContainer {
    /// Show `template` with `args`, replacing any current tooltip.
    pub fn set_tooltip(&mut self, template: &str, args: TooltipArgs) {
        self.active = Some(ActiveTooltip {
            template: template.to_string(),
            args,
        });
    }

    pub fn remove_tooltip(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&ActiveTooltip> {
        self.active.as_ref()
    }
}

/// Tooltip display service: containers looked up by name.
#[derive(Resource, Default)]
pub struct TooltipContainers {
    containers: HashMap<String, TooltipContainer>,
}

impl TooltipContainers {
    /// Register an empty container; an existing one of the same name is kept.
    pub fn register(&mut self, name: &str) {
        self.containers.entry(name.to_string()).or_default();
    }

    pub fn get(&self, name: &str) -> Option<&TooltipContainer> {
        self.containers.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TooltipContainer> {
        self.containers.get_mut(name)
    }

    /// `(container name, tooltip)` for every container showing something.
    pub fn active_tooltips(&self) -> impl Iterator<Item = (&str, &ActiveTooltip)> {
        self.containers
            .iter()
            .filter_map(|(name, c)| c.active().map(|t| (name.as_str(), t)))
    }
}

// =============================================================================
// System
// =============================================================================

/// Renders every active tooltip just below-right of the pointer.
pub fn tooltip_container_ui(
    mut contexts: EguiContexts,
    containers: Res<TooltipContainers>,
    managers: Query<&PowerManager>,
) {
    let ctx = contexts.ctx_mut();
    let Some(pointer_pos) = ctx.pointer_hover_pos() else {
        return;
    };
    let pos = pointer_pos + egui::vec2(16.0, 20.0);

    for (name, tooltip) in containers.active_tooltips() {
        if tooltip.template != SIMPLE_TOOLTIP {
            warn_once!(
                "Unknown tooltip template '{}', rendering as {}",
                tooltip.template,
                SIMPLE_TOOLTIP
            );
        }
        let text = tooltip.args.text(&managers);

        egui::Area::new(egui::Id::new(("tooltip_container", name)))
            .fixed_pos(pos)
            .interactable(false)
            .order(egui::Order::Tooltip)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(theme::TOOLTIP_FILL)
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(text)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT),
                        );
                    });
            });
    }
}

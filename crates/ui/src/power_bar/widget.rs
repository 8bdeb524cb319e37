//! The power bar: supply as a filled column, consumption as an indicator.

use bevy::log::warn_once;
use bevy::prelude::*;
use bevy_egui::egui;

use rendering::bar_renderer::BarRenderer;
use rendering::chrome::ChromeProvider;
use simulation::player::LocalPlayer;
use simulation::power::{PowerManager, PowerModel, PowerState};

use super::config::PowerBarConfig;
use super::error::PowerBarError;
use crate::tooltip_container::{TooltipArgs, TooltipContainers};

// =============================================================================
// Constants
// =============================================================================

/// Smallest power scale; the bar never zooms in further than this.
pub const BASE_POWER_SCALE: f32 = 100.0;

/// Fraction of the remaining distance covered by the bar each frame.
pub const ANIM_RATE: f32 = 0.3;

pub const COLOR_CRITICAL: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);
pub const COLOR_LOW: egui::Color32 = egui::Color32::from_rgb(255, 165, 0);
pub const COLOR_NORMAL: egui::Color32 = egui::Color32::from_rgb(50, 205, 50);

// =============================================================================
// Pure helpers
// =============================================================================

/// Scale denominator for the bar: 100 doubled until it exceeds both values.
///
/// Stops once the scale overflows to infinity, so infinite inputs terminate.
pub fn power_scale(provided: f32, drained: f32) -> f32 {
    let max_power = provided.max(drained);
    let mut scale = BASE_POWER_SCALE;
    while max_power >= scale && scale.is_finite() {
        scale *= 2.0;
    }
    scale
}

/// One animation step from `previous` towards `target`.
///
/// With no previous value the target is taken as-is.
pub fn smooth(previous: Option<f32>, target: f32) -> f32 {
    let from = previous.unwrap_or(target);
    lerp(from, target, ANIM_RATE)
}

pub fn bar_color(state: PowerState) -> egui::Color32 {
    match state {
        PowerState::Critical => COLOR_CRITICAL,
        PowerState::Low => COLOR_LOW,
        PowerState::Normal => COLOR_NORMAL,
    }
}

pub fn tooltip_text(model: &dyn PowerModel) -> String {
    format!(
        "Power Usage: {}/{}",
        model.power_provided(),
        model.power_drained()
    )
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// =============================================================================
// Widget
// =============================================================================

/// Per-widget state; lives on the widget entity.
#[derive(Component, Debug, Clone)]
pub struct PowerBarWidget {
    power_actor: Entity,
    tooltip_template: String,
    tooltip_container: Option<String>,
    indicator_sheet: String,
    indicator_image: String,
    last_provided_frac: Option<f32>,
    last_drained_frac: Option<f32>,
}

impl PowerBarWidget {
    /// Bind to the local player's power model.
    pub fn new(world: &World, config: &PowerBarConfig) -> Result<Self, PowerBarError> {
        let local = world
            .get_resource::<LocalPlayer>()
            .ok_or(PowerBarError::NoLocalPlayer)?;
        if world.get::<PowerManager>(local.actor).is_none() {
            return Err(PowerBarError::MissingPowerManager(local.actor));
        }
        Ok(Self::for_actor(local.actor, config))
    }

    /// Bind to the power model on `actor` without checking it exists.
    pub fn for_actor(actor: Entity, config: &PowerBarConfig) -> Self {
        Self {
            power_actor: actor,
            tooltip_template: config.tooltip_template.clone(),
            tooltip_container: config.tooltip_container.clone(),
            indicator_sheet: config.indicator_sheet.clone(),
            indicator_image: config.indicator_image.clone(),
            last_provided_frac: None,
            last_drained_frac: None,
        }
    }

    pub fn power_actor(&self) -> Entity {
        self.power_actor
    }

    /// Smoothed `(provided, drained)` fractions from the last draw.
    pub fn smoothed_fractions(&self) -> (Option<f32>, Option<f32>) {
        (self.last_provided_frac, self.last_drained_frac)
    }

    pub fn pointer_entered(&self, containers: &mut TooltipContainers) {
        let Some(name) = &self.tooltip_container else {
            return;
        };
        let Some(container) = containers.get_mut(name) else {
            warn!("Power bar tooltip container '{name}' is not registered");
            return;
        };
        let actor = self.power_actor;
        container.set_tooltip(
            &self.tooltip_template,
            TooltipArgs::new(move |lookup| {
                lookup
                    .power_model(actor)
                    .map(tooltip_text)
                    .unwrap_or_default()
            }),
        );
    }

    pub fn pointer_exited(&self, containers: &mut TooltipContainers) {
        let Some(name) = &self.tooltip_container else {
            return;
        };
        match containers.get_mut(name) {
            Some(container) => container.remove_tooltip(),
            None => warn!("Power bar tooltip container '{name}' is not registered"),
        }
    }

    /// Draw one frame into `bounds` and advance the animation.
    pub fn draw(
        &mut self,
        model: &dyn PowerModel,
        bounds: egui::Rect,
        chrome: &ChromeProvider,
        renderer: &mut dyn BarRenderer,
    ) {
        let provided = model.power_provided();
        let drained = model.power_drained();
        let scale = power_scale(provided, drained);

        // Current power supply
        let provided_frac = smooth(self.last_provided_frac, provided / scale);
        self.last_provided_frac = Some(provided_frac);

        let top = lerp(bounds.bottom(), bounds.top(), provided_frac);
        let rect = egui::Rect::from_min_max(
            egui::pos2(bounds.left(), top),
            egui::pos2(bounds.right(), bounds.bottom()),
        );
        renderer.fill_rect(rect, bar_color(model.power_state()));

        // Current power drain
        let drained_frac = smooth(self.last_drained_frac, drained / scale);
        self.last_drained_frac = Some(drained_frac);

        let Some(indicator) = chrome.get_image(&self.indicator_sheet, &self.indicator_image)
        else {
            warn_once!(
                "Power bar indicator '{}/{}' not found",
                self.indicator_sheet,
                self.indicator_image
            );
            return;
        };
        let pos = egui::pos2(
            bounds.right() - indicator.size.x,
            lerp(bounds.bottom(), bounds.top(), drained_frac),
        );
        renderer.draw_sprite(indicator, pos);
    }
}

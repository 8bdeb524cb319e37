//! Power supply/consumption state of a player.
//!
//! The numbers themselves are produced elsewhere (buildings, scripted demo
//! controls); this module only stores them and derives the qualitative
//! [`PowerState`] the HUD colors the power bar with.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Power state
// ---------------------------------------------------------------------------

/// Qualitative power situation, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum PowerState {
    #[default]
    Normal,
    Low,
    Critical,
}

impl PowerState {
    /// Derive the state from supply and consumption.
    ///
    /// Supply covering consumption is `Normal`; covering at least half of it
    /// is `Low`; anything less is `Critical`.
    pub fn classify(provided: f32, drained: f32) -> Self {
        if provided >= drained {
            Self::Normal
        } else if provided >= drained * 0.5 {
            Self::Low
        } else {
            Self::Critical
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Low => "Low",
            Self::Critical => "Critical",
        }
    }
}

// ---------------------------------------------------------------------------
// Query interfaces
// ---------------------------------------------------------------------------

/// Read-only view of a power model, as consumed by the HUD.
pub trait PowerModel {
    /// Total power produced, `>= 0`.
    fn power_provided(&self) -> f32;
    /// Total power consumed, `>= 0`.
    fn power_drained(&self) -> f32;
    fn power_state(&self) -> PowerState;
}

/// Resolves an actor's power model at the moment it is needed.
///
/// Tooltip text is evaluated through this at render time so it always shows
/// the live values rather than the ones current when the pointer entered.
pub trait PowerLookup {
    fn power_model(&self, actor: Entity) -> Option<&dyn PowerModel>;
}

impl PowerLookup for Query<'_, '_, &PowerManager> {
    fn power_model(&self, actor: Entity) -> Option<&dyn PowerModel> {
        self.get(actor).ok().map(|pm| pm as &dyn PowerModel)
    }
}

// ---------------------------------------------------------------------------
// PowerManager component
// ---------------------------------------------------------------------------

/// Power bookkeeping attached to a player actor.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerManager {
    provided: f32,
    drained: f32,
    state: PowerState,
}

impl PowerManager {
    pub fn new(provided: f32, drained: f32) -> Self {
        let mut pm = Self::default();
        pm.set_levels(provided, drained);
        pm
    }

    /// Replace both levels and re-derive the state. Negative inputs clamp to 0.
    pub fn set_levels(&mut self, provided: f32, drained: f32) {
        self.provided = provided.max(0.0);
        self.drained = drained.max(0.0);
        self.state = PowerState::classify(self.provided, self.drained);
    }

    /// Override the derived state, e.g. for scripted scenarios.
    pub fn force_state(&mut self, state: PowerState) {
        self.state = state;
    }
}

impl PowerModel for PowerManager {
    fn power_provided(&self) -> f32 {
        self.provided
    }

    fn power_drained(&self) -> f32 {
        self.drained
    }

    fn power_state(&self) -> PowerState {
        self.state
    }
}

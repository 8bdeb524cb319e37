// ---------------------------------------------------------------------------
// PowerBarError: failures while setting up the power bar
// ---------------------------------------------------------------------------

use std::fmt;

use bevy::prelude::Entity;

/// Errors that can occur while configuring or constructing the power bar.
///
/// All of them are configuration errors: the host aborts startup on any of
/// them rather than running without the widget.
#[derive(Debug)]
pub enum PowerBarError {
    /// No `LocalPlayer` resource exists yet.
    NoLocalPlayer,
    /// The local player's actor has no `PowerManager`.
    MissingPowerManager(Entity),
    /// Config file could not be read.
    Io(std::io::Error),
    /// Config file is not valid power bar JSON.
    Config(String),
}

impl fmt::Display for PowerBarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerBarError::NoLocalPlayer => write!(f, "No local player to bind the power bar to"),
            PowerBarError::MissingPowerManager(actor) => {
                write!(f, "Local player actor {actor} has no PowerManager")
            }
            PowerBarError::Io(e) => write!(f, "I/O error: {e}"),
            PowerBarError::Config(msg) => write!(f, "Invalid power bar config: {msg}"),
        }
    }
}

impl std::error::Error for PowerBarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PowerBarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PowerBarError {
    fn from(e: std::io::Error) -> Self {
        PowerBarError::Io(e)
    }
}

impl From<serde_json::Error> for PowerBarError {
    fn from(e: serde_json::Error) -> Self {
        PowerBarError::Config(e.to_string())
    }
}

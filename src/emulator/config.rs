// Configuration management
//
// Host-facing settings persisted as TOML. The core consults none of this
// while emulating; it carries the video hints and button bindings a host
// needs to drive the presenter and the controller ports consistently.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Default configuration file path
const CONFIG_FILE: &str = "famicore.toml";

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Input bindings
    pub input: InputConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Window scale factor over the native 256x240
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Target frame rate (60 for NTSC)
    pub fps: u32,
}

/// Key-binding names for the two controller ports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub player1: ControllerBindings,
    pub player2: ControllerBindings,
}

/// Host key names for one standard controller, in serial read order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerBindings {
    pub a: String,
    pub b: String,
    pub select: String,
    pub start: String,
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            video: VideoConfig {
                scale: 3,
                vsync: true,
                fps: 60,
            },
            input: InputConfig {
                player1: ControllerBindings {
                    a: "X".to_string(),
                    b: "Z".to_string(),
                    select: "RShift".to_string(),
                    start: "Return".to_string(),
                    up: "Up".to_string(),
                    down: "Down".to_string(),
                    left: "Left".to_string(),
                    right: "Right".to_string(),
                },
                player2: ControllerBindings {
                    a: "N".to_string(),
                    b: "M".to_string(),
                    select: "Comma".to_string(),
                    start: "Period".to_string(),
                    up: "I".to_string(),
                    down: "K".to_string(),
                    left: "J".to_string(),
                    right: "L".to_string(),
                },
            },
        }
    }
}

impl EmulatorConfig {
    /// Load the configuration file, falling back to defaults
    pub fn load_or_default() -> Self {
        Self::load_from(Path::new(CONFIG_FILE)).unwrap_or_default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, io::Error> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<(), io::Error> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)
    }
}

//! Application configuration.
//!
//! Values are resolved in three layers, later ones winning:
//!
//! 1. built-in defaults
//! 2. an optional JSON config file (`--config path.json`)
//! 3. command line flags

pub mod cli;
mod error;

use std::fs;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controllers::follow::FollowConfig;
use crate::core::data::Vec2;

pub use cli::{CommonArgs, LogLevel};
pub use error::ConfigError;

pub const DEFAULT_SWITCH_PORT: u16 = 9870;
pub const DEFAULT_SWITCH_TOPIC: &str = "/switch";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub track: TrackConfig,
    pub switch: SwitchConfig,
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub frames_per_second: u32,
}

/// Track geometry in millimetres, scaled to pixels by `pixels_per_mm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub pixels_per_mm: f64,
    pub rect_x: f64,
    pub rect_y: f64,
    pub rect_width: f64,
    pub rect_height: f64,
    pub circle_diameter: f64,
    pub circle_speed: f64,
    pub show_debug: bool,
    pub show_circle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    pub enabled: bool,
    pub bind_addr: SocketAddr,
    pub topic: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            track: TrackConfig::default(),
            switch: SwitchConfig::default(),
            log_level: LogLevel::Info,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            frames_per_second: 30,
        }
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        let defaults = FollowConfig::default();

        Self {
            pixels_per_mm: defaults.pixels_per_mm,
            rect_x: defaults.rect_position_mm.x,
            rect_y: defaults.rect_position_mm.y,
            rect_width: defaults.rect_size_mm.x,
            rect_height: defaults.rect_size_mm.y,
            circle_diameter: defaults.circle_diameter,
            circle_speed: defaults.circle_speed,
            show_debug: defaults.show_debug,
            show_circle: defaults.show_circle,
        }
    }
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_addr: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_SWITCH_PORT)),
            topic: DEFAULT_SWITCH_TOPIC.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Builds the config from defaults, the file named by `--config` and the
    /// remaining flags, then validates the result.
    pub fn resolve(args: &CommonArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.apply_overrides(args);
        config.validate()?;

        Ok(config)
    }

    pub fn apply_overrides(&mut self, args: &CommonArgs) {
        if let Some(speed) = args.speed {
            self.track.circle_speed = speed;
        }
        if let Some(pixels_per_mm) = args.pixels_per_mm {
            self.track.pixels_per_mm = pixels_per_mm;
        }
        if let Some(addr) = args.switch_addr {
            self.switch.bind_addr = addr;
        }
        if args.no_switch {
            self.switch.enabled = false;
        }
        if let Some(level) = args.log_level {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                message: format!("size must be positive, got {}x{}", self.window.width, self.window.height),
            });
        }

        if self.window.frames_per_second == 0 {
            return Err(ConfigError::Invalid {
                field: "window.frames_per_second",
                message: "must be greater than zero".to_string(),
            });
        }

        if !(self.track.pixels_per_mm.is_finite() && self.track.pixels_per_mm > 0.0) {
            return Err(ConfigError::Invalid {
                field: "track.pixels_per_mm",
                message: format!("must be a positive number, got {}", self.track.pixels_per_mm),
            });
        }

        if !(self.track.circle_diameter.is_finite() && self.track.circle_diameter > 0.0) {
            return Err(ConfigError::Invalid {
                field: "track.circle_diameter",
                message: format!("must be a positive number, got {}", self.track.circle_diameter),
            });
        }

        // Speed and rectangle size are clamped by the controller, not rejected.
        if !self.track.circle_speed.is_finite() {
            return Err(ConfigError::Invalid {
                field: "track.circle_speed",
                message: format!("must be finite, got {}", self.track.circle_speed),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn follow_config(&self) -> FollowConfig {
        FollowConfig {
            pixels_per_mm: self.track.pixels_per_mm,
            rect_position_mm: Vec2::new(self.track.rect_x, self.track.rect_y),
            rect_size_mm: Vec2::new(self.track.rect_width, self.track.rect_height),
            circle_diameter: self.track.circle_diameter,
            circle_speed: self.track.circle_speed,
            show_debug: self.track.show_debug,
            show_circle: self.track.show_circle,
        }
    }
}

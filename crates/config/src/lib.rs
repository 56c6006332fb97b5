//! Shared configuration for Redline
//!
//! This crate provides the optional capture region (display dimensions),
//! annotation limits, and the platform's primary shortcut modifier. The
//! modifier is resolved once at startup and never re-detected per keypress.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default display width in pixels
pub const DEFAULT_WIDTH: u32 = 1920;

/// Default display height in pixels
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Default scale factor (1.0 = no scaling)
pub const DEFAULT_SCALE: f32 = 1.0;

/// Environment variable overriding the undo history limit
pub const ENV_HISTORY_LIMIT: &str = "REDLINE_HISTORY_LIMIT";

/// Environment variable overriding platform detection ("mac", "windows", ...)
pub const ENV_PLATFORM: &str = "REDLINE_PLATFORM";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Display configuration for the captured region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Display width in logical pixels
    pub width: u32,
    /// Display height in logical pixels
    pub height: u32,
    /// Scale factor for DPI scaling
    pub scale: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
        }
    }
}

impl DisplayConfig {
    /// Create a new display config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: DEFAULT_SCALE,
        }
    }

    /// Get scaled width (for physical pixel calculations)
    pub fn scaled_width(&self) -> u32 {
        (self.width as f32 * self.scale) as u32
    }

    /// Get scaled height (for physical pixel calculations)
    pub fn scaled_height(&self) -> u32 {
        (self.height as f32 * self.scale) as u32
    }
}

/// Annotation canvas settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Maximum undo snapshots kept
    pub history_limit: usize,
    /// Stroke width a new session starts with
    pub default_stroke_width: u32,
    /// Palette colour a new session starts with
    pub default_color: String,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            history_limit: 30,
            default_stroke_width: 5,
            default_color: "black".to_string(),
        }
    }
}

/// Modifier key that starts undo/redo chords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryModifier {
    /// Command key (macOS)
    Meta,
    /// Control key (everything else)
    Control,
}

impl PrimaryModifier {
    /// Modifier for the platform this binary was built for
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::Meta
        } else {
            Self::Control
        }
    }

    /// Modifier for a platform identification string such as "MacIntel"
    pub fn from_platform_name(platform: &str) -> Self {
        if platform.to_uppercase().contains("MAC") {
            Self::Meta
        } else {
            Self::Control
        }
    }
}

/// Complete Redline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedlineConfig {
    /// Region to capture; `None` captures everything the backend returns
    pub display: Option<DisplayConfig>,
    pub annotator: AnnotatorConfig,
    pub primary_modifier: PrimaryModifier,
}

impl Default for RedlineConfig {
    fn default() -> Self {
        Self {
            display: None,
            annotator: AnnotatorConfig::default(),
            primary_modifier: PrimaryModifier::detect(),
        }
    }
}

impl RedlineConfig {
    /// Defaults with overrides from REDLINE_* environment variables
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Load a JSON config file; missing fields fall back to defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides looked up by environment variable name
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(ENV_HISTORY_LIMIT) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => self.annotator.history_limit = limit,
                Err(_) => warn!("Ignoring invalid {}={:?}", ENV_HISTORY_LIMIT, raw),
            }
        }
        if let Some(platform) = lookup(ENV_PLATFORM) {
            self.primary_modifier = PrimaryModifier::from_platform_name(&platform);
        }
        self
    }
}

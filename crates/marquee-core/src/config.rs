use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::EasingType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Splash screen timing
    #[serde(default)]
    pub splash: SplashConfig,
    /// Split transition tuning
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            splash: SplashConfig::default(),
            transition: TransitionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplashConfig {
    /// How long the splash stays fully visible, in milliseconds
    #[serde(default = "default_splash_duration")]
    pub duration_ms: u64,
    /// Fade-out length after the visible period, in milliseconds
    #[serde(default = "default_splash_fade")]
    pub fade_ms: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_splash_duration(),
            fade_ms: default_splash_fade(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Virtual pixels contributed by one wheel notch
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,
    /// Fraction of a wheel delta fed into the virtual scroll accumulator
    #[serde(default = "default_wheel_multiplier")]
    pub wheel_multiplier: f64,
    /// Gentler fraction applied to drag deltas
    #[serde(default = "default_drag_multiplier")]
    pub drag_multiplier: f64,
    /// Virtual pixels per terminal row; a 40-row terminal maps to a
    /// ~1000px viewport so thresholds match a typical browser window
    #[serde(default = "default_row_unit")]
    pub row_unit: f64,
    /// Completion threshold as a fraction of the viewport height
    #[serde(default = "default_threshold_factor")]
    pub threshold_factor: f64,
    /// Upper clamp as a fraction of the viewport height
    #[serde(default = "default_overshoot_factor")]
    pub overshoot_factor: f64,
    /// Lower clamp on the virtual scroll accumulator
    #[serde(default = "default_min_overshoot")]
    pub min_overshoot: f64,
    /// Virtual pixels removed per frame during the reclaim run-down
    #[serde(default = "default_reverse_step")]
    pub reverse_step: f64,
    /// Progress at which the content pane is mounted inside the reveal
    #[serde(default = "default_content_reveal")]
    pub content_reveal_progress: f64,
    /// Easing curve applied to raw progress
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while the transition is animating (0 = ~60fps fallback)
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            wheel_step: default_wheel_step(),
            wheel_multiplier: default_wheel_multiplier(),
            drag_multiplier: default_drag_multiplier(),
            row_unit: default_row_unit(),
            threshold_factor: default_threshold_factor(),
            overshoot_factor: default_overshoot_factor(),
            min_overshoot: default_min_overshoot(),
            reverse_step: default_reverse_step(),
            content_reveal_progress: default_content_reveal(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl TransitionConfig {
    /// Interval between animation frames.
    ///
    /// An fps of 0 falls back to a fixed ~16ms interval; the progress
    /// trajectory is identical modulo timing jitter.
    #[inline]
    pub fn tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_splash_duration() -> u64 {
    3500
}

fn default_splash_fade() -> u64 {
    500
}

fn default_wheel_step() -> f64 {
    100.0
}

fn default_wheel_multiplier() -> f64 {
    0.3
}

fn default_drag_multiplier() -> f64 {
    0.2
}

fn default_row_unit() -> f64 {
    25.0
}

fn default_threshold_factor() -> f64 {
    0.8
}

fn default_overshoot_factor() -> f64 {
    1.2
}

fn default_min_overshoot() -> f64 {
    -100.0
}

fn default_reverse_step() -> f64 {
    15.0
}

fn default_content_reveal() -> f64 {
    0.3
}

fn default_animation_fps() -> u16 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/marquee/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("marquee")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("marquee.log")
    }
}

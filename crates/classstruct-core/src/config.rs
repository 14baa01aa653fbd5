//! Application configuration.
//!
//! Loaded from an optional JSON file. Missing fields fall back to defaults,
//! so a file only needs the values it changes:
//!
//! ```json
//! {
//!   "timings": { "reveal_duration_ms": 1200 },
//!   "hero_image": { "kind": "bundled", "location": "assets/hero.png" }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{ShellError, ShellResult};

/// Placeholder hero image used until a bundled asset is configured.
pub const PLACEHOLDER_HERO_URL: &str = "https://placekitten.com/400/400";

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub timings: AnimationTimings,
    pub hero_image: HeroImageSource,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        // Phone-shaped window
        Self {
            title: "ClassStruct".to_string(),
            width: 420.0,
            height: 860.0,
        }
    }
}

/// Durations and bounds for the onboarding timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTimings {
    pub reveal_duration_ms: u64,
    /// Starting vertical offset of the hero and text blocks, in px.
    pub reveal_offset_px: f32,
    pub cta_duration_ms: u64,
    /// Duration of each half of the glow cycle.
    pub glow_leg_ms: u64,
    pub glow_min: f32,
    pub glow_max: f32,
    pub frame_interval_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            reveal_duration_ms: 900,
            reveal_offset_px: 40.0,
            cta_duration_ms: 500,
            glow_leg_ms: 1800,
            glow_min: 0.4,
            glow_max: 1.0,
            frame_interval_ms: 16,
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationTimings {
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }

    pub fn cta_duration(&self) -> Duration {
        Duration::from_millis(self.cta_duration_ms)
    }

    pub fn glow_leg(&self) -> Duration {
        Duration::from_millis(self.glow_leg_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn validate(&self) -> ShellResult<()> {
        let durations = [
            ("reveal_duration_ms", self.reveal_duration_ms),
            ("cta_duration_ms", self.cta_duration_ms),
            ("glow_leg_ms", self.glow_leg_ms),
            ("frame_interval_ms", self.frame_interval_ms),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, v)| *v == 0) {
            return Err(ShellError::InvalidConfig(format!("{} must be greater than zero", name)));
        }

        let unit = 0.0..=1.0;
        if !unit.contains(&self.glow_min) || !unit.contains(&self.glow_max) {
            return Err(ShellError::InvalidConfig(format!(
                "glow bounds must lie in [0, 1], got [{}, {}]",
                self.glow_min, self.glow_max
            )));
        }
        if self.glow_min > self.glow_max {
            return Err(ShellError::InvalidConfig(format!(
                "glow_min ({}) exceeds glow_max ({})",
                self.glow_min, self.glow_max
            )));
        }
        if !self.reveal_offset_px.is_finite() {
            return Err(ShellError::InvalidConfig("reveal_offset_px must be finite".to_string()));
        }
        Ok(())
    }
}

/// Where the hero image comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum HeroImageSource {
    /// Loaded by the webview from a URL.
    Remote(String),
    /// Read from disk and embedded as a data URI.
    Bundled(PathBuf),
}

impl Default for HeroImageSource {
    fn default() -> Self {
        HeroImageSource::Remote(PLACEHOLDER_HERO_URL.to_string())
    }
}

impl From<&str> for HeroImageSource {
    /// `http(s)://` values are remote, anything else is a file path.
    fn from(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            HeroImageSource::Remote(value.to_string())
        } else {
            HeroImageSource::Bundled(PathBuf::from(value))
        }
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> ShellResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(ShellError::ConfigIo)?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(?path, "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, else the default config file if it exists,
    /// else built-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> ShellResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ShellResult<()> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ShellError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        self.timings.validate()
    }
}

/// `<config dir>/classstruct/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("classstruct").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.timings.reveal_duration(), Duration::from_millis(900));
        assert_eq!(config.timings.cta_duration(), Duration::from_millis(500));
        assert_eq!(config.timings.glow_leg(), Duration::from_millis(1800));
        assert_eq!(config.hero_image, HeroImageSource::Remote(PLACEHOLDER_HERO_URL.into()));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "timings": {{ "reveal_duration_ms": 1200 }} }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.timings.reveal_duration_ms, 1200);
        assert_eq!(config.timings.cta_duration_ms, 500);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn bundled_hero_from_json() {
        let json = r#"{ "hero_image": { "kind": "bundled", "location": "assets/hero.png" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.hero_image, HeroImageSource::Bundled(PathBuf::from("assets/hero.png")));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let timings = AnimationTimings {
            cta_duration_ms: 0,
            ..Default::default()
        };
        let err = timings.validate().unwrap_err();
        assert!(err.to_string().contains("cta_duration_ms"));
    }

    #[test]
    fn inverted_glow_bounds_are_rejected() {
        let timings = AnimationTimings {
            glow_min: 0.9,
            glow_max: 0.5,
            ..Default::default()
        };
        assert!(matches!(timings.validate(), Err(ShellError::InvalidConfig(_))));

        let timings = AnimationTimings {
            glow_max: 1.5,
            ..Default::default()
        };
        assert!(timings.validate().is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_or_default(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ShellError::ConfigIo(_)));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(AppConfig::load(file.path()), Err(ShellError::ConfigParse(_))));
    }

    #[test]
    fn hero_source_from_argument() {
        assert_eq!(
            HeroImageSource::from("https://example.com/a.png"),
            HeroImageSource::Remote("https://example.com/a.png".into())
        );
        assert_eq!(
            HeroImageSource::from("assets/hero.webp"),
            HeroImageSource::Bundled(PathBuf::from("assets/hero.webp"))
        );
    }
}

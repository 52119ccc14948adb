use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the content-source base origin
pub const API_URL_ENV: &str = "VITRINE_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            source: SourceConfig::default(),
            motion: MotionConfig::default(),
            reveal: RevealConfig::default(),
            categories: default_categories(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Where posts come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base origin of the content API (also used to resolve media paths)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Collection name, requested as `<base>/api/<collection>?populate=*`
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Image shown when a post has no usable cover image
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Image shown when a post has no usable author avatar
    #[serde(default = "default_placeholder_avatar")]
    pub placeholder_avatar: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
            request_timeout_secs: default_timeout(),
            placeholder_image: default_placeholder_image(),
            placeholder_avatar: default_placeholder_avatar(),
        }
    }
}

/// Spring parameters for scroll smoothing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Distance to target below which the output snaps to the input
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f64,
    /// Velocity below which the spring is considered at rest
    #[serde(default = "default_rest_speed")]
    pub rest_speed: f64,
    /// Animation frames per second, used when a tick carries no explicit dt
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
            rest_delta: default_rest_delta(),
            rest_speed: default_rest_speed(),
            frame_rate: default_frame_rate(),
        }
    }
}

/// Easing curve applied to entrance animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the final state
    None,
    Linear,
    Cubic,
    Quintic,
    /// Exponential ease-out
    #[default]
    EaseOut,
}

/// Viewport reveal defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Pixels the viewport is shrunk by on every side before testing visibility
    #[serde(default = "default_margin_px")]
    pub margin_px: f64,
    /// Intersection ratio that must be exceeded to reveal (0 = any overlap)
    #[serde(default)]
    pub amount: f64,
    /// Entrance animation duration in milliseconds
    #[serde(default = "default_reveal_duration")]
    pub duration_ms: u64,
    /// Delay added per position in a stagger group, in milliseconds
    #[serde(default = "default_stagger")]
    pub stagger_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            margin_px: default_margin_px(),
            amount: 0.0,
            duration_ms: default_reveal_duration(),
            stagger_ms: default_stagger(),
            easing: EasingType::default(),
        }
    }
}

/// A selectable post category with its display icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl CategoryConfig {
    pub fn new(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:1337".to_string()
}

fn default_collection() -> String {
    "blogs".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_placeholder_image() -> String {
    "https://via.placeholder.com/400x300?text=No+Image".to_string()
}

fn default_placeholder_avatar() -> String {
    "https://via.placeholder.com/100x100?text=User".to_string()
}

fn default_stiffness() -> f64 {
    100.0
}

fn default_damping() -> f64 {
    30.0
}

fn default_mass() -> f64 {
    1.0
}

fn default_rest_delta() -> f64 {
    0.001
}

fn default_rest_speed() -> f64 {
    0.01
}

fn default_frame_rate() -> u32 {
    60
}

fn default_margin_px() -> f64 {
    100.0
}

fn default_reveal_duration() -> u64 {
    600
}

fn default_stagger() -> u64 {
    100
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("All", "🌟"),
        CategoryConfig::new("Technology", "💻"),
        CategoryConfig::new("React", "⚛️"),
        CategoryConfig::new("AI", "🤖"),
        CategoryConfig::new("Web3", "🌐"),
        CategoryConfig::new("Design", "🎨"),
        CategoryConfig::new("Development", "⚡"),
        CategoryConfig::new("Programming", "🖥️"),
    ]
}

impl AppConfig {
    /// Load configuration from file or return defaults, then apply env overrides
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };

        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            config.apply_base_url(&base_url)?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vitrine/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vitrine")
            .join("config.toml")
    }

    /// Replace the content-source base origin (must be an absolute URL)
    pub fn apply_base_url(&mut self, base_url: &str) -> crate::Result<()> {
        url::Url::parse(base_url)?;
        self.source.base_url = base_url.trim_end_matches('/').to_string();
        Ok(())
    }

    fn validate(&self) -> crate::Result<()> {
        url::Url::parse(&self.source.base_url)?;

        let motion = &self.motion;
        if motion.stiffness <= 0.0 || motion.mass <= 0.0 || motion.damping < 0.0 {
            return Err(crate::Error::Config(format!(
                "Spring needs positive stiffness and mass and non-negative damping \
                (stiffness = {}, damping = {}, mass = {})",
                motion.stiffness, motion.damping, motion.mass
            )));
        }

        if !(0.0..=1.0).contains(&self.reveal.amount) {
            return Err(crate::Error::Config(format!(
                "reveal.amount must be within [0, 1], got {}",
                self.reveal.amount
            )));
        }

        Ok(())
    }
}

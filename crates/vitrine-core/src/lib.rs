pub mod config;
pub mod content;
pub mod error;

pub use config::{AppConfig, CategoryConfig, EasingType, MotionConfig, RevealConfig, SourceConfig};
pub use error::{Error, Result};
